/// Colors the game asks the canvas to paint with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
    Purple,
    Green,
    Yellow,
    Orange,
}

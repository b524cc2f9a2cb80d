// Domain layer - Boards, sections, items and the assets they point at
pub mod asset;
pub mod board;

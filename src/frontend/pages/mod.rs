mod board_detail;
mod boards;

pub use board_detail::BoardDetail;
pub use boards::Boards;

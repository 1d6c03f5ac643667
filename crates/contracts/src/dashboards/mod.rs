pub mod d400_schedule_board;

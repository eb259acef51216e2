pub mod fbi;

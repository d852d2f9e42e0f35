// Moduły dla poszczególnych komend
pub mod check;
pub mod decode;
pub mod encode;

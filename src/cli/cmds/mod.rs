pub mod browse;
pub mod init;
pub mod pie;
pub mod root;
pub mod sum;

//! # lsb_text 库
//!
//! 本库包含基于定界符终止协议的 LSB 文本隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;

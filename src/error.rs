//! # 核心错误类型模块
//!
//! 定义隐写核心可能返回的所有错误。调用方可以对各个变体进行模式匹配，
//! 从而区分"容量不足"、"字符无法编码"与"没有找到隐藏消息"这几种结果。
//! 图像读写层面的 I/O 错误不在此列，它们由外层的处理器负责附加上下文并传播。

use thiserror::Error;

/// 隐写核心的错误枚举。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StegoError {
    /// 消息比特流 (含定界符) 超出了载体图像的嵌入容量。
    /// 嵌入在写入任何比特之前中止，不会产生部分写入的结果。
    #[error(
        "The message needs {required} bits but the image can only hold {available}. \nUse a larger image or shorten the message."
    )]
    CapacityExceeded {
        /// 消息比特流 (含定界符) 的总比特数。
        required: usize,
        /// 载体可承载的比特数 (宽 × 高 × 3)。
        available: usize,
    },

    /// 消息中存在码点超出 0–255 的字符，无法用 8 位编码表示。
    /// 嵌入在写入任何比特之前中止。
    #[error(
        "The character '{ch}' (U+{code:04X}) at index {index} cannot be represented in the 8-bit encoding."
    )]
    UnencodableCharacter {
        /// 违规的字符。
        ch: char,
        /// 该字符的 Unicode 码点。
        code: u32,
        /// 该字符在消息中的字符索引。
        index: usize,
    },

    /// 扫描完整张图像也没有观察到定界符。
    /// 这是一个正常的、非致命的结果：图像中没有隐藏消息，
    /// 或者图像在嵌入后被有损地重新编码、低位比特已被破坏。
    #[error("No hidden message was found in the image.")]
    NotFound,
}

/// 标记隐藏消息结束的定界符序列。
/// 提取器不知道消息的长度，只能依靠这个固定的 5 字符序列判断消息在哪里结束。
/// 它是线格式的一部分，不可配置：兼容的实现必须使用完全相同的定界符。
pub const DELIMITER: &str = "#####";

/// 每个字符占用的比特数。
/// 每个字符按 8 位无符号整数 (0–255) 大端序编码，超出此范围的字符会被显式拒绝。
pub const BITS_PER_CHAR: usize = 8;

/// 每个像素用于承载数据的通道数。
/// 只使用 R、G、B 三个颜色通道的最低有效位，Alpha 通道永远不被触碰。
pub const CHANNELS_PER_PIXEL: usize = 3;

/// 定界符占用的比特数 (5 个字符 × 8 位 = 40 位)。
/// 不变量：这 40 位始终是写入载体的最后 40 位。
pub const DELIMITER_BITS: usize = DELIMITER.len() * BITS_PER_CHAR;

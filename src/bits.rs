//! # 比特编解码模块
//!
//! 负责字符序列与比特流之间的无损、确定性转换，是嵌入器和提取器共用的叶子工具。
//! 每个字符被视为一个 8 位无符号码点 (0–255)，按大端序展开成 8 个比特；
//! 反向转换则把比特流按 8 位分组还原为字符。

use crate::constants::BITS_PER_CHAR;
use crate::error::StegoError;

/// 把文本转换为比特流。
///
/// 按顺序遍历每个字符，将其码点展开为 8 个大端序比特 (每个元素为 0 或 1)，
/// 无分隔地拼接。
///
/// # Errors
///
/// 如果某个字符的码点超出 0–255，返回 [`StegoError::UnencodableCharacter`]，
/// 并指出违规字符及其位置。
pub fn text_to_bits(text: &str) -> Result<Vec<u8>, StegoError> {
    let mut bits = Vec::with_capacity(text.len() * BITS_PER_CHAR);

    for (index, ch) in text.chars().enumerate() {
        let code = ch as u32;
        if code > u8::MAX as u32 {
            return Err(StegoError::UnencodableCharacter { ch, code, index });
        }

        // 大端序：先高位后低位
        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push(((code >> shift) & 1) as u8);
        }
    }

    Ok(bits)
}

/// 把比特流还原为文本。
///
/// 按顺序每 8 个比特为一组，解释为 8 位无符号码点并转换为对应字符。
/// 末尾不足 8 位的残余比特会被静默丢弃——当扫描在容量边界处停在某个字节
/// 中间时，这是预期的情况，而不是错误。
pub fn bits_to_text(bits: &[u8]) -> String {
    bits.chunks_exact(BITS_PER_CHAR)
        .map(|chunk| {
            let byte = chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
            char::from(byte)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 验证单个字符的大端序展开
    #[test]
    fn test_text_to_bits_big_endian() -> Result<(), StegoError> {
        // 'A' = 65 = 0b01000001
        assert_eq!(text_to_bits("A")?, vec![0, 1, 0, 0, 0, 0, 0, 1]);
        Ok(())
    }

    /// 验证多字符拼接顺序与定界符字符的编码
    #[test]
    fn test_text_to_bits_concatenation() -> Result<(), StegoError> {
        // '#' = 35 = 0b00100011
        let bits = text_to_bits("##")?;
        assert_eq!(bits.len(), 16);
        assert_eq!(&bits[..8], &[0, 0, 1, 0, 0, 0, 1, 1]);
        assert_eq!(&bits[8..], &[0, 0, 1, 0, 0, 0, 1, 1]);
        Ok(())
    }

    /// 验证双向转换在 8 位可表示的字符上互为逆运算
    #[test]
    fn test_round_trip() -> Result<(), StegoError> {
        // 包含 ASCII 与扩展拉丁字符 (é = U+00E9 = 233)
        let text = "Hello, world! café #42";
        assert_eq!(bits_to_text(&text_to_bits(text)?), text);
        Ok(())
    }

    /// 验证空文本产生空比特流
    #[test]
    fn test_empty_text() -> Result<(), StegoError> {
        assert!(text_to_bits("")?.is_empty());
        assert_eq!(bits_to_text(&[]), "");
        Ok(())
    }

    /// 验证末尾不足 8 位的残余比特被静默丢弃
    #[test]
    fn test_partial_trailing_group_discarded() {
        // 12 个比特 = 1 个完整字节 + 4 个残余比特
        let mut bits = vec![0, 1, 0, 0, 0, 0, 0, 1];
        bits.extend_from_slice(&[1, 1, 1, 1]);
        assert_eq!(bits_to_text(&bits), "A");
    }

    /// 验证码点超出 0–255 的字符被显式拒绝
    #[test]
    fn test_unencodable_character() {
        let result = text_to_bits("ok, 你好");
        assert_eq!(
            result,
            Err(StegoError::UnencodableCharacter {
                ch: '你',
                code: 0x4F60,
                index: 4,
            })
        );
    }
}

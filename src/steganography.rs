//! # 隐写核心模块
//!
//! 实现 LSB 替换隐写的嵌入与提取两个操作。两者共享同一个确定性的扫描顺序：
//! 外层循环按行从上到下，内层循环按列从左到右，像素内按 R、G、B 的固定顺序
//! 访问通道，Alpha 通道永远不被修改。消息末尾附加固定定界符，提取器据此
//! 在不知道消息长度的情况下判断何时停止。

use crate::bits::{bits_to_text, text_to_bits};
use crate::constants::{BITS_PER_CHAR, CHANNELS_PER_PIXEL, DELIMITER};
use crate::error::StegoError;
use image::RgbaImage;

/// 把消息嵌入载体图像，返回一张新的隐写图像。
///
/// 载体本身永远不会被修改；输出是载体的深拷贝，只有承载了数据比特的那些
/// 通道的最低有效位与原图不同，比特流耗尽后扫描立即停止，其余像素与载体
/// 逐字节相同。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 消息中存在码点超出 0–255 的字符 ([`StegoError::UnencodableCharacter`])。
/// * 消息比特流 (含定界符) 超出载体的嵌入容量 ([`StegoError::CapacityExceeded`])。
///
/// 两种情况下都不会写入任何比特。
pub fn embed(carrier: &RgbaImage, message: &str) -> Result<RgbaImage, StegoError> {
    // 完整明文 = 消息 + 定界符，定界符的 40 位始终是最后写入的比特
    let payload = format!("{message}{DELIMITER}");
    let bits = text_to_bits(&payload)?;

    let capacity = carrier.width() as usize * carrier.height() as usize * CHANNELS_PER_PIXEL;
    if bits.len() > capacity {
        return Err(StegoError::CapacityExceeded {
            required: bits.len(),
            available: capacity,
        });
    }

    let mut stego = carrier.clone();
    let mut cursor = bits.iter();

    'scan: for y in 0..stego.height() {
        for x in 0..stego.width() {
            let pixel = stego.get_pixel_mut(x, y);
            for channel in &mut pixel.0[..CHANNELS_PER_PIXEL] {
                match cursor.next() {
                    Some(&bit) => *channel = (*channel & 0xFE) | bit,
                    None => break 'scan,
                }
            }
        }
    }

    Ok(stego)
}

/// 从隐写图像中提取隐藏的消息。
///
/// 按与嵌入完全相同的固定顺序扫描，收集每个通道的最低有效位；每凑满 8 位
/// 就解码一个字符，并检查已解码文本是否以定界符结尾。首次匹配时立即返回
/// 去掉定界符的消息，图像的其余部分不再读取。提取是纯函数，重复调用结果
/// 相同。
///
/// # Errors
///
/// 扫描完整张图像也没有观察到定界符时返回 [`StegoError::NotFound`]。
pub fn extract(stego: &RgbaImage) -> Result<String, StegoError> {
    let mut text = String::new();
    let mut group = Vec::with_capacity(BITS_PER_CHAR);

    for y in 0..stego.height() {
        for x in 0..stego.width() {
            let pixel = stego.get_pixel(x, y);
            for &channel in &pixel.0[..CHANNELS_PER_PIXEL] {
                group.push(channel & 1);
                if group.len() < BITS_PER_CHAR {
                    continue;
                }

                text.push_str(&bits_to_text(&group));
                group.clear();

                if text.ends_with(DELIMITER) {
                    // 定界符是 5 个 ASCII 字节，截断安全
                    text.truncate(text.len() - DELIMITER.len());
                    return Ok(text);
                }
            }
        }
    }

    Err(StegoError::NotFound)
}

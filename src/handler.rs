//! # 命令处理逻辑模块
//!
//! 包含处理 `encode` 和 `decode` 子命令的高级业务逻辑。
//! 本模块负责协调图像 I/O、调用核心隐写算法以及向用户报告结果。
//! 图像读写失败与"没有找到隐藏消息"是两种不同的结果，绝不混为一谈。

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::error::StegoError;
use crate::steganography::{embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责读取载体图像、调用嵌入核心函数把消息写入像素的最低有效位，
/// 最后将结果图像以无损格式保存到目标路径。
///
/// # Arguments
///
/// * `args` - 包含载体路径、消息文本和输出路径的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码载体图像文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 核心嵌入函数 (`embed`) 因容量不足或消息含无法编码的字符而失败。
/// * 无法写入到目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let carrier = image::open(&args.image)
        .with_context(|| {
            format!(
                "Unable to open carrier image: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?
        .to_rgba8();

    let dest = args
        .dest
        .unwrap_or_else(|| default_encode_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let stego = embed(&carrier, &args.message).with_context(|| {
        format!(
            "Failed to hide the message in: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    // 输出必须是无损格式，有损重压缩会破坏嵌入的比特
    stego.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {} \nMake sure the extension is a supported lossless format (png, bmp, tiff, webp, qoi).",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用提取核心函数扫描出隐藏的消息，
/// 把消息打印到标准输出，并按需另存为文本文件。
///
/// 图像可以读取但不含有效载荷时不算失败：打印一条提示后正常返回。
///
/// # Arguments
///
/// * `args` - 包含输入图像路径和可选文本输出路径的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 文本输出文件已存在且未指定 `--force`。
/// * 无法写入到目标文本文件。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let stego = image::open(&args.image)
        .with_context(|| {
            format!(
                "Unable to open stego image: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?
        .to_rgba8();

    let message = match extract(&stego) {
        Ok(message) => message,
        Err(StegoError::NotFound) => {
            println!(
                "{}",
                "No hidden message was found in the image.".yellow().bold()
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!(
        "Hidden message found ({} characters):",
        message.chars().count().to_string().green().bold()
    );
    println!("{message}");

    if let Some(text_path) = args.text {
        ensure_writable(&text_path, args.force)?;
        fs::write(&text_path, &message).with_context(|| {
            format!(
                "Unable to write to target text file: {}",
                text_path.to_string_lossy().red().bold()
            )
        })?;
        println!(
            "The message has been successfully saved: {}",
            text_path.to_string_lossy().green().bold()
        );
    }

    Ok(())
}

/// 省略输出路径时，在载体旁边生成默认的 "<文件名>_encoded.png"。
fn default_encode_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "carrier".to_string());
    image.with_file_name(format!("{stem}_encoded.png"))
}

/// 覆盖保护：目标文件已存在且未指定 `--force` 时拒绝写入。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

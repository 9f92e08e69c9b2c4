//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取文本消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取文本消息。消息以固定定界符结尾，提取时无需知道消息长度。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (嵌入) 和 decode (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 把一条文本消息嵌入无损格式图像 (如 PNG, BMP) 中。
    Encode(EncodeArgs),

    /// 从经过隐写的图像中提取隐藏的消息。
    Decode(DecodeArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 用作载体的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的消息文本。
    #[arg(short, long)]
    pub message: String,

    /// 嵌入完成后，保存结果图像的输出路径。
    /// 省略时默认保存为载体旁边的 "<文件名>_encoded.png"。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已隐藏消息的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 可选：把提取出的消息另存为文本文件的路径。
    /// 无论是否提供，消息都会打印到标准输出。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

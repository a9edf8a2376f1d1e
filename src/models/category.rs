//! # 文件类别
//!
//! 按扩展名（以及少数按名称）划分文件类别，用于包含过滤和展示。
//!
//! ## 依赖关系
//! - 被 `batch/filter.rs`, `batch/scanner.rs` 使用
//! - 被 `cli/rename.rs` 作为参数类型使用

use clap::ValueEnum;

/// 设计文件扩展名
pub const DESIGN_EXTENSIONS: &[&str] = &["f3d", "f3z"];
/// 工程图扩展名
pub const DRAWING_EXTENSIONS: &[&str] = &["f2d"];
/// 导入的 CAD 交换格式扩展名
pub const CAD_EXTENSIONS: &[&str] = &[
    "step", "stp", "iges", "igs", "dwg", "dxf", "sat", "x_t", "x_b",
];

/// 文件类别
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileCategory {
    /// Fusion 360 designs (.f3d, .f3z)
    Design,
    /// Fusion 360 drawings (.f2d)
    Drawing,
    /// Simulation studies (name contains "simulation")
    Simulation,
    /// Imported CAD files (.step, .iges, .dwg, ...)
    Cad,
    /// Anything that is not a design or a drawing
    Other,
}

impl FileCategory {
    /// 全部类别
    pub const ALL: [FileCategory; 5] = [
        FileCategory::Design,
        FileCategory::Drawing,
        FileCategory::Simulation,
        FileCategory::Cad,
        FileCategory::Other,
    ];

    /// 判断文件是否属于该类别
    ///
    /// `extension` 不带点，大小写不敏感。
    pub fn matches(self, name: &str, extension: &str) -> bool {
        let ext = extension.to_lowercase();
        let ext = ext.as_str();
        match self {
            FileCategory::Design => DESIGN_EXTENSIONS.contains(&ext),
            FileCategory::Drawing => DRAWING_EXTENSIONS.contains(&ext),
            FileCategory::Simulation => name.to_lowercase().contains("simulation"),
            FileCategory::Cad => CAD_EXTENSIONS.contains(&ext),
            FileCategory::Other => {
                !DESIGN_EXTENSIONS.contains(&ext) && !DRAWING_EXTENSIONS.contains(&ext)
            }
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileCategory::Design => write!(f, "design"),
            FileCategory::Drawing => write!(f, "drawing"),
            FileCategory::Simulation => write!(f, "simulation"),
            FileCategory::Cad => write!(f, "cad"),
            FileCategory::Other => write!(f, "other"),
        }
    }
}

/// 生成展示用的文件类型描述
pub fn describe_file_type(extension: &str) -> String {
    let ext = extension.to_lowercase();
    match ext.as_str() {
        "f3d" | "f3z" => "Fusion 360 Design".to_string(),
        "f2d" => "Fusion 360 Drawing".to_string(),
        "step" | "stp" => "STEP File".to_string(),
        "iges" | "igs" => "IGES File".to_string(),
        "dwg" | "dxf" => "AutoCAD File".to_string(),
        "" => "Unknown File Type".to_string(),
        _ => format!("{} File", ext.to_uppercase()),
    }
}

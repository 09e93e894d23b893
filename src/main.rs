use clap::Parser;
use std::path::PathBuf;

use scene_renamer::io::{DefaultSceneReader, DefaultSceneWriter, SceneReader};
use scene_renamer::{
    load_mapping_csv, load_mapping_json, utils, MappingRow, RenameSession, SUPPORTED_EXTENSIONS,
};

#[derive(Parser)]
#[command(name = "scene_renamer")]
#[command(about = "根据CSV映射表批量重命名Unity场景中的GameObject")]
#[command(version = "0.3.0")]
struct Cli {
    /// 映射表路径（CSV，表头须包含 Type 与 Entity ID 列）
    #[arg(default_value = "Naminfg.csv")]
    mapping: PathBuf,

    /// Unity场景文件路径
    #[arg(default_value = "Assets/Scenes/MainScene-001.unity")]
    scene: PathBuf,

    /// 映射表为JSON数组格式（而非CSV）
    #[arg(long)]
    json: bool,

    /// 写回前创建带时间戳的备份文件
    #[arg(long)]
    backup: bool,

    /// 只做匹配统计，不写回场景文件
    #[arg(long)]
    dry_run: bool,

    /// 将运行报告写出为JSON文件
    #[arg(long)]
    report: Option<PathBuf>,

    /// 静默模式(仅输出错误)
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    validate_scene_path(&cli.scene)?;

    if !cli.quiet {
        println!("映射表: {:?}", cli.mapping);
        println!("场景文件: {:?}", cli.scene);
        println!();
    }

    let rows = load_rows(&cli)?;
    if rows.is_empty() {
        return Err("映射表中没有有效的数据行".into());
    }
    if !cli.quiet {
        println!("✓ 从映射表加载了 {} 行", rows.len());
    }

    let reader = DefaultSceneReader;
    let doc = reader.read(&cli.scene)?;
    if !cli.quiet {
        println!("✓ 场景文件已加载（{} 字符）", doc.text.chars().count());
        println!("\n开始处理 {} 个重命名操作...\n", rows.len());
    }

    let mut session = RenameSession::new(doc.text);
    process_rows(&cli, &mut session, &rows)?;

    write_report_if_requested(&cli, &session)?;

    if !session.is_modified() {
        return Err("没有任何对象被重命名".into());
    }

    persist(&cli, &session)?;

    if !cli.quiet {
        println!("✓ 成功重命名 {} 个对象", session.report().summary());
    }

    Ok(())
}

/// 验证场景文件路径
fn validate_scene_path(scene: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    if !scene.exists() {
        return Err(format!("场景文件不存在: {:?}", scene).into());
    }

    let extension = scene
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    if !SUPPORTED_EXTENSIONS.iter().any(|&ext| Some(ext) == extension.as_deref()) {
        return Err("场景文件必须是 .unity、.prefab 或 .asset 文件".into());
    }

    Ok(())
}

/// 加载映射表（CSV或JSON）
fn load_rows(cli: &Cli) -> Result<Vec<MappingRow>, Box<dyn std::error::Error>> {
    let rows = if cli.json {
        load_mapping_json(&cli.mapping)?
    } else {
        load_mapping_csv(&cli.mapping)?
    };
    Ok(rows)
}

/// 逐行处理并打印进度
fn process_rows(
    cli: &Cli,
    session: &mut RenameSession,
    rows: &[MappingRow],
) -> Result<(), Box<dyn std::error::Error>> {
    for (idx, row) in rows.iter().enumerate() {
        if !cli.quiet {
            println!(
                "[{}/{}] 处理: '{}' → '{}'",
                idx + 1,
                rows.len(),
                row.search_token,
                row.replacement_token
            );
        }

        session.apply_row(row)?;

        if !cli.quiet {
            // 刚记录的最后一条结果
            if let Some(outcome) = session.report().outcomes().last() {
                if outcome.matched {
                    println!("  ✓ {}", outcome);
                } else {
                    println!("  ✗ {}", outcome);
                }
            }
        }
    }

    Ok(())
}

/// 写出JSON报告（若指定）
fn write_report_if_requested(
    cli: &Cli,
    session: &RenameSession,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(report_path) = &cli.report else {
        return Ok(());
    };

    let json = serde_json::to_string_pretty(session.report())?;
    std::fs::write(report_path, &json).map_err(|e| format!("写入报告失败: {}", e))?;

    if !cli.quiet {
        println!("✓ 报告已写入: {:?}", report_path);
    }

    Ok(())
}

/// 持久化修改后的场景
fn persist(cli: &Cli, session: &RenameSession) -> Result<(), Box<dyn std::error::Error>> {
    if cli.dry_run {
        if !cli.quiet {
            println!("（dry-run模式，未写回场景文件）");
        }
        return Ok(());
    }

    if cli.backup {
        let backup_path = utils::create_backup(&cli.scene)?;
        if !cli.quiet {
            println!("✓ 已创建备份文件: {:?}", backup_path);
        }
    }

    session.save(&DefaultSceneWriter, &cli.scene)?;

    if !cli.quiet {
        println!("✓ 场景文件已更新: {:?}", cli.scene);
    }

    Ok(())
}

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use atlas_packer_core::config::{
    AnimationConfig, AnimationPattern, InputConfig, OutputConfig, PackerConfig, ProjectConfig,
};
use atlas_packer_core::sprite::{Sprite, extract_sprites, parse_sheet};
use atlas_packer_core::{PackOutput, build_animations, export, pack_sprites};
use clap::{ArgAction, Parser, Subcommand};
use image::ImageReader;
use serde_json::json;
use tracing::{info, warn};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "atlas-packer",
    about = "Pack sprites into a texture atlas",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack the inputs of a project file into an atlas
    Pack(PackArgs),
    /// Write example project files
    Example(ExampleArgs),
}

#[derive(Parser, Debug)]
struct PackArgs {
    /// Project configuration JSON file
    #[arg(short, long)]
    config: PathBuf,
    /// Redirect all output files into this directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExampleArgs {
    /// Directory to create the example files in
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Example(args) => run_example(args),
    }
}

fn init_tracing(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_pack(args: &PackArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.config)
        .with_context(|| format!("read config {}", args.config.display()))?;
    let mut project: ProjectConfig = serde_json::from_str(&raw)
        .with_context(|| format!("parse config {}", args.config.display()))?;

    if let Some(dir) = &args.output_dir {
        rebase_outputs(&mut project.output, dir);
    }
    validate_project(&project)?;
    project.atlas.validate()?;

    let sprites = load_sprites(&project)?;
    anyhow::ensure!(!sprites.is_empty(), "no sprites found to pack");
    info!(count = sprites.len(), "loaded sprites");

    // Sheet-ingested durations feed the animation export after the sprites
    // themselves have been consumed by the packer.
    let durations: HashMap<String, Option<u32>> =
        sprites.iter().map(|s| (s.key.clone(), s.duration)).collect();

    let mut output = pack_sprites(sprites, &project.atlas)?;
    output.atlas.metadata.sources = project.inputs.iter().map(|i| i.image_path.clone()).collect();

    info!("{}", output.layout.summary());
    info!(
        width = output.atlas.width,
        height = output.atlas.height,
        "final atlas size"
    );

    write_outputs(&project, &output, &durations)?;
    info!("atlas packing completed");
    Ok(())
}

fn validate_project(project: &ProjectConfig) -> anyhow::Result<()> {
    anyhow::ensure!(
        !project.inputs.is_empty(),
        "no input files specified in configuration"
    );
    for input in &project.inputs {
        anyhow::ensure!(!input.image_path.is_empty(), "input image path cannot be empty");
    }
    anyhow::ensure!(
        !project.output.image_path.is_empty(),
        "output image path cannot be empty"
    );
    anyhow::ensure!(
        !project.output.data_path.is_empty(),
        "output data path cannot be empty"
    );
    Ok(())
}

/// Moves every output file into `dir`, keeping only its file name.
fn rebase_outputs(output: &mut OutputConfig, dir: &Path) {
    let rebase = |p: &str| -> String {
        let name = Path::new(p)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| p.to_string());
        dir.join(name).to_string_lossy().into_owned()
    };
    output.image_path = rebase(&output.image_path);
    output.data_path = rebase(&output.data_path);
    if let Some(anim) = &output.animation_path {
        output.animation_path = Some(rebase(anim));
    }
}

fn load_sprites(project: &ProjectConfig) -> anyhow::Result<Vec<Sprite>> {
    let cfg = &project.atlas;
    let mut sprites = Vec::new();

    for input in &project.inputs {
        let image_path = Path::new(&input.image_path);
        if !image_path.exists() {
            warn!(path = %input.image_path, "image file not found, skipping input");
            continue;
        }
        let prefix = input.prefix.as_deref();

        if let Some(data_path) = &input.data_path {
            if !Path::new(data_path).exists() {
                warn!(path = %data_path, "data file not found, skipping input");
                continue;
            }
            let sheet = ImageReader::open(image_path)
                .with_context(|| format!("open {}", image_path.display()))?
                .decode()
                .with_context(|| format!("decode {}", image_path.display()))?
                .to_rgba8();
            let data = fs::read_to_string(data_path)
                .with_context(|| format!("read {data_path}"))?;
            let frames = parse_sheet(&data)
                .with_context(|| format!("parse sheet data {data_path}"))?;
            sprites.extend(extract_sprites(&sheet, &frames, prefix));
        } else if image_path.is_dir() {
            for entry in WalkDir::new(image_path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_png(e.path()))
            {
                sprites.push(load_single(entry.path(), prefix, cfg)?);
            }
        } else {
            sprites.push(load_single(image_path, prefix, cfg)?);
        }
    }

    Ok(sprites)
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

fn load_single(path: &Path, prefix: Option<&str>, cfg: &PackerConfig) -> anyhow::Result<Sprite> {
    let image = ImageReader::open(path)
        .with_context(|| format!("open {}", path.display()))?
        .decode()
        .with_context(|| format!("decode {}", path.display()))?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match prefix {
        Some(p) => format!("{p}{stem}"),
        None => stem,
    };
    Ok(Sprite::from_image(name, &image, cfg.trim, cfg.trim_threshold))
}

fn write_outputs(
    project: &ProjectConfig,
    output: &PackOutput,
    durations: &HashMap<String, Option<u32>>,
) -> anyhow::Result<()> {
    write_parent_dir(&project.output.image_path)?;
    output
        .image
        .save(&project.output.image_path)
        .with_context(|| format!("save atlas image {}", project.output.image_path))?;
    info!(path = %project.output.image_path, "atlas image saved");

    write_parent_dir(&project.output.data_path)?;
    let json = export::atlas_to_json(&output.atlas)?;
    fs::write(&project.output.data_path, json)
        .with_context(|| format!("save atlas data {}", project.output.data_path))?;
    info!(path = %project.output.data_path, "atlas data saved");

    if let (Some(animations), Some(anim_path)) =
        (&project.animations, &project.output.animation_path)
    {
        if !animations.is_empty() {
            let set = build_animations(animations, durations, &project.output.image_path);
            write_parent_dir(anim_path)?;
            let json = export::animations_to_json(&set)?;
            fs::write(anim_path, json)
                .with_context(|| format!("save animation data {anim_path}"))?;
            info!(path = %anim_path, "animation data saved");
        }
    }

    Ok(())
}

fn write_parent_dir(path: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

fn run_example(args: &ExampleArgs) -> anyhow::Result<()> {
    fs::create_dir_all(&args.output)
        .with_context(|| format!("create directory {}", args.output.display()))?;

    let example = ProjectConfig {
        inputs: vec![
            InputConfig {
                image_path: "sprites/player.png".into(),
                data_path: None,
                prefix: Some("player_".into()),
            },
            InputConfig {
                image_path: "sprites/enemies.png".into(),
                data_path: Some("sprites/enemies.json".into()),
                prefix: Some("enemy_".into()),
            },
        ],
        output: OutputConfig {
            image_path: "out/atlas.png".into(),
            data_path: "out/atlas.json".into(),
            animation_path: Some("out/animations.json".into()),
        },
        atlas: PackerConfig {
            max_width: 2048,
            max_height: 2048,
            padding: 2,
            allow_rotation: false,
            trim: true,
            trim_threshold: 0,
            power_of_two: true,
        },
        animations: Some(vec![
            AnimationConfig {
                name: "player_walk".into(),
                frames: Vec::new(),
                frame_duration: 100,
                looped: true,
                pattern: Some(AnimationPattern {
                    name_pattern: "player_walk_{0:D2}".into(),
                    start_frame: 1,
                    end_frame: 8,
                }),
            },
            AnimationConfig {
                name: "player_idle".into(),
                frames: vec![
                    "player_idle_01".into(),
                    "player_idle_02".into(),
                    "player_idle_03".into(),
                ],
                frame_duration: 200,
                looped: true,
                pattern: None,
            },
        ]),
    };

    let config_path = args.output.join("atlas-project.json");
    fs::write(&config_path, serde_json::to_string_pretty(&example)?)
        .with_context(|| format!("write {}", config_path.display()))?;

    // Sample sheet-data file in the shape `pack` accepts via `dataPath`.
    let sheet_data = json!({
        "sprites": [
            { "name": "goblin", "x": 0,  "y": 0, "width": 32, "height": 32, "rotated": false },
            { "name": "orc",    "x": 32, "y": 0, "width": 48, "height": 48, "rotated": false },
            { "name": "dragon", "x": 80, "y": 0, "width": 64, "height": 64, "rotated": false }
        ]
    });
    let sheet_path = args.output.join("example-sprites.json");
    fs::write(&sheet_path, serde_json::to_string_pretty(&sheet_data)?)
        .with_context(|| format!("write {}", sheet_path.display()))?;

    info!(path = %config_path.display(), "example project config created");
    info!(path = %sheet_path.display(), "example sheet data created");
    info!("run: atlas-packer pack --config {}", config_path.display());
    Ok(())
}

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use std::path::{Path, PathBuf};
use voice_checklist_rust::{checklist, cli, config, error, photos, transcript, types};

use cli::{Cli, Commands};
use config::Config;
use error::{ChecklistError, Result};
use types::{ImageRef, SpeechSegment};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Extract {
            transcript: transcript_path,
            segments,
            output,
        } => {
            let catalog = config.unit_catalog()?;
            let text = read_transcript(&transcript_path)?;
            let segments = load_segments(segments.as_deref())?;

            let records = transcript::extract_measurements(&text, &segments, &catalog);
            let json = serde_json::to_string_pretty(&records)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ records written to {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Create {
            transcript: transcript_path,
            segments,
            images,
            photo_dir,
            recording_start,
            output,
        } => {
            println!("📋 voice-checklist - create\n");
            let catalog = config.unit_catalog()?;

            println!("[1/3] extracting measurements...");
            let text = read_transcript(&transcript_path)?;
            let segments = load_segments(segments.as_deref())?;
            let mut records = transcript::extract_measurements(&text, &segments, &catalog);
            println!("✔ {} record(s) extracted\n", records.len());

            println!("[2/3] attaching photos...");
            let image_refs =
                load_images(images.as_deref(), photo_dir.as_deref(), recording_start)?;
            let image_count = image_refs.len();
            photos::associate_photos(&mut records, image_refs);
            println!("✔ {} photo(s) attached\n", image_count);

            println!("[3/3] writing checklist...");
            let output_path = output.unwrap_or_else(|| {
                default_dir(&config).join(format!(
                    "inspection_{}.xlsx",
                    Local::now().format("%Y%m%d_%H%M%S")
                ))
            });
            checklist::create_checklist(&records, &output_path)?;
            println!("✔ checklist written to {}", output_path.display());
        }

        Commands::Annotate {
            transcript: transcript_path,
            template,
            segments,
            images,
            photo_dir,
            recording_start,
            output,
        } => {
            println!("📋 voice-checklist - annotate\n");
            let catalog = config.unit_catalog()?;

            println!("[1/3] extracting measurements...");
            let text = read_transcript(&transcript_path)?;
            let segments = load_segments(segments.as_deref())?;
            let mut records = transcript::extract_measurements(&text, &segments, &catalog);
            println!("✔ {} record(s) extracted\n", records.len());

            println!("[2/3] attaching photos...");
            let image_refs =
                load_images(images.as_deref(), photo_dir.as_deref(), recording_start)?;
            let image_count = image_refs.len();
            photos::associate_photos(&mut records, image_refs);
            println!("✔ {} photo(s) attached\n", image_count);

            println!("[3/3] annotating template...");
            let output_path = output.unwrap_or_else(|| {
                let base = template
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "template.xlsx".to_string());
                default_dir(&config).join(format!(
                    "annotated_{}_{}",
                    Local::now().format("%m-%d-%Y"),
                    base
                ))
            });
            checklist::annotate_checklist(&template, &records, &output_path, &catalog)?;
            println!("✔ annotated checklist written to {}", output_path.display());
        }

        Commands::Config {
            set_unit_vocabulary,
            set_output_dir,
        } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_unit_vocabulary {
                config.unit_vocabulary = Some(path);
                changed = true;
            }
            if let Some(path) = set_output_dir {
                config.output_dir = Some(path);
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ configuration saved");
            } else {
                println!("config file: {}", Config::config_path()?.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn read_transcript(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ChecklistError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn load_segments(path: Option<&Path>) -> Result<Vec<SpeechSegment>> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        None => Ok(Vec::new()),
    }
}

/// Image references from a JSON manifest, a photo folder scan, or both.
fn load_images(
    manifest: Option<&Path>,
    photo_dir: Option<&Path>,
    recording_start: Option<String>,
) -> Result<Vec<ImageRef>> {
    let mut images: Vec<ImageRef> = Vec::new();

    if let Some(path) = manifest {
        let content = std::fs::read_to_string(path)?;
        images.extend(serde_json::from_str::<Vec<ImageRef>>(&content)?);
    }

    if let Some(dir) = photo_dir {
        let start = recording_start.ok_or_else(|| {
            ChecklistError::PhotoScan("--photo-dir requires --recording-start".into())
        })?;
        let start = NaiveDateTime::parse_from_str(&start, "%Y-%m-%d %H:%M:%S")
            .map_err(|e| ChecklistError::PhotoScan(format!("bad recording start: {}", e)))?;
        images.extend(photos::scan_photo_folder(dir, start)?);
    }

    Ok(images)
}

fn default_dir(config: &Config) -> PathBuf {
    config
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
}

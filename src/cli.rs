use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "voice-checklist")]
#[command(about = "Spoken inspection recordings to spec-checked checklists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract measurement records from a transcript and print them as JSON
    Extract {
        /// Transcript text file
        #[arg(required = true)]
        transcript: PathBuf,

        /// Speech-segment timing JSON ([{"text": ..., "startSeconds": ...}])
        #[arg(short, long)]
        segments: Option<PathBuf>,

        /// Output JSON file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a new checklist workbook from a transcript
    Create {
        /// Transcript text file
        #[arg(required = true)]
        transcript: PathBuf,

        /// Speech-segment timing JSON
        #[arg(short, long)]
        segments: Option<PathBuf>,

        /// Image manifest JSON ([{"locator": ..., "capturedAtSeconds": ...}])
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// Photo folder to scan (EXIF capture times; needs --recording-start)
        #[arg(long)]
        photo_dir: Option<PathBuf>,

        /// Recording start time, "YYYY-MM-DD HH:MM:SS" (with --photo-dir)
        #[arg(long)]
        recording_start: Option<String>,

        /// Output workbook (default: inspection_<timestamp>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Annotate an existing template workbook with recorded values
    Annotate {
        /// Transcript text file
        #[arg(required = true)]
        transcript: PathBuf,

        /// Template workbook (.xlsx)
        #[arg(short, long, required = true)]
        template: PathBuf,

        /// Speech-segment timing JSON
        #[arg(short, long)]
        segments: Option<PathBuf>,

        /// Image manifest JSON
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// Photo folder to scan (EXIF capture times; needs --recording-start)
        #[arg(long)]
        photo_dir: Option<PathBuf>,

        /// Recording start time, "YYYY-MM-DD HH:MM:SS" (with --photo-dir)
        #[arg(long)]
        recording_start: Option<String>,

        /// Output workbook (default: annotated_<date>_<template name>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or edit configuration
    Config {
        /// Set the extra unit-vocabulary JSON file
        #[arg(long)]
        set_unit_vocabulary: Option<PathBuf>,

        /// Set the default output directory
        #[arg(long)]
        set_output_dir: Option<PathBuf>,
    },
}

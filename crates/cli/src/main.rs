mod bundle;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use surfquad::synth::{checkerboard, GridCfg};
use surfquad::{QuadCfg, QuadInput, Quadrangulation};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::bundle::{Bundle, QuadDoc};
use crate::provenance::{current_git_rev, ensure_parent, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Quadrangulate Morse-Smale separatrix networks")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Quadrangulate a JSON input bundle
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Use extrema-only (dual) quadrangles
        #[arg(long)]
        dual: bool,
    },
    /// Write a synthetic checkerboard bundle
    Synth {
        /// Lattice cells as WxH
        #[arg(long, default_value = "2x2", value_parser = parse_cells)]
        cells: (usize, usize),
        #[arg(long, default_value_t = 2)]
        resolution: usize,
        #[arg(long, default_value_t = 0.0)]
        jitter: f32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { input, out, dual } => run(&input, &out, dual),
        Action::Synth {
            cells,
            resolution,
            jitter,
            seed,
            out,
        } => synth(
            GridCfg {
                cells_x: cells.0,
                cells_y: cells.1,
                resolution,
                jitter,
                seed,
            },
            &out,
        ),
        Action::Report => report(),
    }
}

fn parse_cells(s: &str) -> Result<(usize, usize), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let w = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    Ok((w, h))
}

fn run(input: &Path, out: &Path, dual: bool) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), dual, "run");
    let text =
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let bundle: Bundle =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", input.display()))?;
    let data = bundle.decode();

    let cfg = if dual { QuadCfg::dual() } else { QuadCfg::direct() };
    let mut quad = Quadrangulation::new(cfg);
    let summary = quad.execute(&QuadInput {
        points: &data.points,
        segmentation: &data.segmentation,
        separatrices: &data.separatrices,
        mesh: &data.mesh,
    })?;

    write_json(out, &QuadDoc::new(&quad, summary))?;
    let params = json!({
        "input": input.to_string_lossy(),
        "dual": dual,
        "critical_points": data.points.len(),
        "quads": summary.quads,
    });
    write_sidecar(out, Payload::new("run", params))?;
    Ok(())
}

fn synth(cfg: GridCfg, out: &Path) -> Result<()> {
    tracing::info!(?cfg, out = %out.display(), "synth");
    let generated = checkerboard(&cfg)?;
    write_json(out, &Bundle::from(&generated))?;
    let params = json!({
        "cells": [cfg.cells_x, cfg.cells_y],
        "resolution": cfg.resolution,
        "jitter": cfg.jitter,
        "seed": cfg.seed,
    });
    write_sidecar(out, Payload::new("synth", params))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": current_git_rev(),
        "tool": format!("surfquad {}", surfquad::VERSION),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if path.as_os_str().is_empty() {
        bail!("empty output path");
    }
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cells_flag_parses() {
        assert_eq!(parse_cells("3x4"), Ok((3, 4)));
        assert_eq!(parse_cells("5X1"), Ok((5, 1)));
        assert!(parse_cells("3").is_err());
        assert!(parse_cells("ax2").is_err());
    }

    #[test]
    fn synth_then_run_writes_quads_and_sidecars() {
        let dir = tempdir().unwrap();
        let bundle_path = dir.path().join("grid.json");
        let out = dir.path().join("out").join("quads.json");
        let cfg = GridCfg {
            cells_x: 2,
            cells_y: 2,
            resolution: 2,
            jitter: 0.0,
            seed: 0,
        };
        synth(cfg, &bundle_path).unwrap();
        assert!(dir.path().join("grid.provenance.json").exists());

        run(&bundle_path, &out, true).unwrap();
        let doc: QuadDoc = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc.summary.quads, 4);
        assert_eq!(doc.cells.len(), 20);
        assert!(dir.path().join("out").join("quads.provenance.json").exists());
    }

    #[test]
    fn run_reports_odd_endpoints() {
        let dir = tempdir().unwrap();
        let bundle_path = dir.path().join("bad.json");
        let text = r#"{
            "critical_points": [{"vertex": 0, "cell": 1, "kind": "saddle"}],
            "segmentation": [0],
            "vertex_count": 1,
            "triangles": [],
            "separatrices": {"cell_ids": [1], "mask": [0], "points": [[0.0, 0.0, 0.0]]}
        }"#;
        fs::write(&bundle_path, text).unwrap();
        let err = run(&bundle_path, &dir.path().join("q.json"), false).unwrap_err();
        assert!(err.to_string().contains("odd number"));
    }
}

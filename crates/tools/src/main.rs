use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use sightline_core::{
    FieldObject, Floor, GeometryConfig, GeometryEngine, Pos, TileArea, TileFlag, TileKind, TileOpType,
    rasterize, to_cell_lens,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Engine config TOML; defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rasterize one segment and list the cells it touches
    Rasterize {
        #[arg(allow_negative_numbers = true)]
        x0: f64,
        #[arg(allow_negative_numbers = true)]
        y0: f64,
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        /// Measure each cell by its offset from the first cell instead of by entry distance
        #[arg(long)]
        cell_lens: bool,
    },
    /// Show the lines swept by a rotating wing hazard
    Wings {
        #[arg(long, default_value_t = 2)]
        count: u32,
        #[arg(long, default_value_t = 5)]
        len: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        degree: i32,
    },
    /// Tick a demo floor and draw what a viewer sees and where the blades are
    Demo {
        #[arg(long, default_value_t = 4)]
        ticks: u32,
        #[arg(long, default_value_t = 15)]
        degree_per_tick: i32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let config = GeometryConfig::load_with_env(args.config.as_deref())
        .with_context(|| format!("Failed to load config: {:?}", args.config))?;

    match args.command {
        Command::Rasterize { x0, y0, x1, y1, cell_lens } => {
            let line = rasterize(x0, y0, x1, y1);
            let line = if cell_lens { to_cell_lens(&line) } else { line };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&line)?);
            } else {
                for (i, cell) in line.iter().enumerate() {
                    println!("{i:3} ({:4}, {:4}) len={:.3}", cell.x, cell.y, cell.len);
                }
            }
        }
        Command::Wings { count, len, degree } => {
            if count == 0 || len < 0 {
                bail!("wing count must be at least 1 and len non-negative (got {count}, {len})");
            }
            let engine = GeometryEngine::new(config);
            let obj = FieldObject::rotate_line_attack(Pos::default(), count, len, 0).with_degree(degree);
            let lines = engine.line_attack_cells(&obj);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&lines)?);
            } else {
                for (wing, line) in lines.iter().enumerate() {
                    let cells: Vec<String> = line.iter().map(|c| format!("({},{})", c.x, c.y)).collect();
                    println!("wing {wing} @ {:3}deg: {}", obj.wing_degree(wing as u32), cells.join(" "));
                }
            }
        }
        Command::Demo { ticks, degree_per_tick } => {
            run_demo(config, ticks, degree_per_tick, args.json)?;
        }
    }

    Ok(())
}

fn demo_floor(config: &GeometryConfig, degree_per_tick: i32) -> Floor {
    let (w, h) = (config.map_width, config.map_height);
    let mut area = TileArea::filled(w, h, TileFlag::of(TileKind::Grass));
    let (cx, cy) = ((w / 2) as i32, (h / 2) as i32);
    area.apply_rect(Pos { y: cy - 6, x: cx - 6 }, 13, 13, TileOpType::Override, TileFlag::of(TileKind::Wall));
    area.apply_rect(Pos { y: cy - 5, x: cx - 5 }, 11, 11, TileOpType::Override, TileFlag::of(TileKind::Room));
    area.set_tile(Pos { y: cy, x: cx + 6 }, TileFlag::of(TileKind::Door));
    area.set_tile(Pos { y: cy - 6, x: cx }, TileFlag::of(TileKind::Window));
    area.apply_rect(Pos { y: cy - 2, x: cx - 3 }, 2, 1, TileOpType::Merge, TileFlag::of(TileKind::Tree));

    let mut floor = Floor::new("demo", area);
    floor.add_field_object(FieldObject::rotate_line_attack(Pos { y: cy + 2, x: cx + 2 }, 2, 3, degree_per_tick));
    floor
}

fn run_demo(config: GeometryConfig, ticks: u32, degree_per_tick: i32, json: bool) -> Result<()> {
    let floor_config = config.clone();
    let engine = GeometryEngine::new(config);
    let mut floor = demo_floor(&floor_config, degree_per_tick);
    let viewer = Pos { y: (floor_config.map_height / 2) as i32, x: (floor_config.map_width / 2) as i32 - 3 };

    for _ in 0..ticks {
        let seen = floor.visible_from(&engine, viewer);
        let danger = floor.danger_cells(&engine);
        info!(tick = floor.current_tick(), visible = seen.len(), danger = danger.len(), "demo tick");

        if json {
            let positions: Vec<Pos> = danger.iter().map(|c| c.pos).collect();
            println!("{}", serde_json::json!({
                "tick": floor.current_tick(),
                "snapshot_hash": floor.snapshot_hash(),
                "visible": seen.cells(),
                "danger": positions,
            }));
        } else {
            println!("tick {} hash {:016x}", floor.current_tick(), floor.snapshot_hash());
            let area = floor.area();
            for y in 0..area.height() as i32 {
                let row: String = (0..area.width() as i32)
                    .map(|x| {
                        let p = Pos { y, x };
                        if p == viewer {
                            '@'
                        } else if danger.iter().any(|c| c.pos == p) {
                            '*'
                        } else if !seen.is_visible(p) {
                            ' '
                        } else if area.tile_at(p).is_opaque() {
                            '#'
                        } else {
                            '.'
                        }
                    })
                    .collect();
                println!("{}", row.trim_end());
            }
        }
        floor.advance_tick();
    }

    println!("Demo complete after {ticks} ticks.");
    Ok(())
}

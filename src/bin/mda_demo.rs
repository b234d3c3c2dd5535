//! MDA Demo Runner
//!
//! Headless demo of the display toolkit. Each scene draws into the buffer
//! and the result is rendered as text to stdout. The save/restore scene
//! goes through a real file to exercise the persistence path end to end.

use std::io::{self, Write};
use std::process::ExitCode;

use mda_display::mda::{Attribute, Buffer, Cell, Context, Point, Rect, Snapshot};
use mda_display::video::StubVideo;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// A few codepage 437 glyphs the scenes use
const CP437_LIGHT_SHADE: u8 = 0xB0;
const CP437_DARK_SHADE: u8 = 0xB2;
const CP437_ARROW_UP: u8 = 0x18;
const CP437_ARROW_DOWN: u8 = 0x19;
const CP437_ARROW_RIGHT: u8 = 0x1A;
const CP437_ARROW_LEFT: u8 = 0x1B;

const SCENES: &[&str] = &[
    "lines", "caps", "rect", "border", "scroll", "capture", "context",
];

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut scene: Option<String> = None;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--scene" => {
                i += 1;
                if i < args.len() {
                    scene = Some(args[i].clone());
                }
            }
            "-h" | "--help" => {
                show_help = true;
            }
            other => {
                eprintln!("Unknown argument: {other}");
                show_help = true;
            }
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let mut video = StubVideo::new();
    let ctx = Context::initialize(&mut video);

    let selected: Vec<&str> = match scene.as_deref() {
        Some(name) => {
            if !SCENES.contains(&name) {
                eprintln!("Unknown scene: {name} (expected one of {SCENES:?})");
                return ExitCode::FAILURE;
            }
            vec![name]
        }
        None => SCENES.to_vec(),
    };

    for name in selected {
        tracing::info!("running scene: {name}");
        let mut buf = Buffer::new();
        let result = match name {
            "lines" => {
                scene_lines(&mut buf, &ctx);
                Ok(())
            }
            "caps" => {
                scene_caps(&mut buf);
                Ok(())
            }
            "rect" => {
                scene_rect(&mut buf, &ctx);
                Ok(())
            }
            "border" => {
                scene_border(&mut buf, &ctx);
                Ok(())
            }
            "scroll" => {
                scene_scroll(&mut buf, &ctx);
                Ok(())
            }
            "capture" => scene_capture(&mut buf, &ctx),
            "context" => scene_context(&buf, &ctx),
            _ => unreachable!(),
        };
        if let Err(e) = result {
            tracing::error!("scene {name} failed: {e}");
            return ExitCode::FAILURE;
        }
        println!("--- {name} ---");
        print!("{}", Snapshot::capture(&buf, &ctx).to_text());
    }

    ExitCode::SUCCESS
}

fn print_help() {
    println!("MDA Demo Runner");
    println!();
    println!("Usage: mda-demo [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -s, --scene <NAME>  Run one scene ({})", SCENES.join(", "));
    println!("  -h, --help          Show this help");
}

/// Diagonal staircase of growing h/v lines
fn scene_lines(buf: &mut Buffer, ctx: &Context) {
    let hcell = ctx.make_cell(b'-');
    let vcell = ctx.make_cell(b'|');
    for i in 0..10u8 {
        buf.draw_hline(Point::new(5, 2 + i), Point::new(5 + i, 2 + i), hcell);
        buf.draw_vline(Point::new(40 + 2 * i, 2), Point::new(40 + 2 * i, 2 + i), vcell);
    }
}

/// Capped lines, including the length-1 and length-2 edge cases
fn scene_caps(buf: &mut Buffer) {
    let hcaps = [
        Cell::new(CP437_ARROW_LEFT, Attribute::NORMAL),
        Cell::new(b'-', Attribute::NORMAL),
        Cell::new(CP437_ARROW_RIGHT, Attribute::NORMAL),
    ];
    let vcaps = [
        Cell::new(CP437_ARROW_UP, Attribute::NORMAL),
        Cell::new(b'|', Attribute::NORMAL),
        Cell::new(CP437_ARROW_DOWN, Attribute::NORMAL),
    ];
    for i in 0..10u8 {
        buf.draw_hline_caps(Point::new(5, 2 + i), Point::new(5 + i, 2 + i), hcaps);
    }
    for i in 0..6u8 {
        buf.draw_vline_caps(Point::new(40 + 2 * i, 2), Point::new(40 + 2 * i, 2 + i), vcaps);
    }
}

/// Outline with a filled interior
fn scene_rect(buf: &mut Buffer, ctx: &Context) {
    buf.draw_rect(Rect::new(5, 2, 35, 7), ctx.make_cell(CP437_DARK_SHADE));
    buf.fill_rect(Rect::new(6, 3, 33, 5), ctx.make_cell(CP437_LIGHT_SHADE));
}

/// Frame with ASCII corner/edge cells
fn scene_border(buf: &mut Buffer, ctx: &Context) {
    let c = |chr| ctx.make_cell(chr);
    buf.draw_border(
        Rect::new(10, 5, 30, 8),
        [
            c(b'+'),
            c(b'-'),
            c(b'+'),
            c(b'|'),
            c(b'|'),
            c(b'+'),
            c(b'-'),
            c(b'+'),
        ],
    );
}

/// Scroll a framed region each direction once
fn scene_scroll(buf: &mut Buffer, ctx: &Context) {
    let frame = Rect::new(9, 4, 37, 9);
    buf.draw_rect(frame, ctx.make_cell(b'#'));
    let region = frame.inner();
    for (i, y) in (region.y..region.bottom() as u8).enumerate() {
        buf.fill_rect(
            Rect::new(region.x, y, region.w, 1),
            ctx.make_cell(b'a' + i as u8),
        );
    }
    buf.scroll_up(region, ctx.blank);
    buf.scroll_down(region, ctx.blank);
    buf.scroll_left(region, ctx.blank);
    buf.scroll_right(region, ctx.blank);
}

/// Save a rect to a file, clear, and restore it at a different origin
fn scene_capture(buf: &mut Buffer, ctx: &Context) -> mda_display::mda::Result<()> {
    let path = std::env::temp_dir().join("mda-demo-rect.mda");

    let src = Rect::new(5, 2, 35, 7);
    buf.fill_rect(src, ctx.make_cell(b'*'));
    buf.draw_rect(src, ctx.make_cell(b'#'));
    {
        let file = std::fs::File::create(&path)?;
        buf.save_rect(file, src)?;
    }
    tracing::info!("rect saved to {}", path.display());

    buf.clear_screen();
    let dst = Rect::new(10, 15, 35, 7);
    {
        let file = std::fs::File::open(&path)?;
        buf.load_rect(file, dst)?;
    }
    std::fs::remove_file(&path)?;
    Ok(())
}

/// Dump the context state to stderr
fn scene_context(_buf: &Buffer, ctx: &Context) -> mda_display::mda::Result<()> {
    let mut out = Vec::new();
    ctx.dump(&mut out)?;
    io::stderr().write_all(&out)?;
    Ok(())
}

mod app;
mod layout;
mod terminal;
mod tween;
mod view;

use std::fs::File;
use std::io;

use carousel::{Carousel, Slides};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::terminal::Terminal;

const DEMO_TITLE: &str = "NBA Salary Prediction";
const DEMO_COVER: &str = "/NBA.png";
const DEMO_IMAGES: [&str; 4] = ["/NBA1.png", "/NBA2.png", "/NBA3.png", "/NBA4.png"];
const COVER_FLAG: &str = "--cover=";

/// `carousel-tui [title [--cover=image] image...]`, falling back to the demo deck.
///
/// The cover is shown alone when no other images are given.
fn slides_from_args(mut args: impl Iterator<Item = String>) -> Slides<String> {
    let Some(title) = args.next() else {
        let images = DEMO_IMAGES.iter().map(|s| s.to_string()).collect();
        return Slides::from_sources(DEMO_TITLE, Some(images), Some(DEMO_COVER.to_string()));
    };

    let mut cover = None;
    let mut images = Vec::new();
    for arg in args {
        match arg.strip_prefix(COVER_FLAG) {
            Some(path) => cover = Some(path.to_string()),
            None => images.push(arg),
        }
    }
    Slides::from_sources(title, Some(images), cover)
}

fn main() -> io::Result<()> {
    let log_file = File::create("carousel-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file).map_err(io::Error::other)?;

    let slides = slides_from_args(std::env::args().skip(1));
    let Some(carousel) = Carousel::for_slides(&slides) else {
        eprintln!("No images to show for \"{}\"", slides.title());
        return Ok(());
    };
    log::info!(
        "[tui] showing {} with {} slides",
        slides.title(),
        slides.len()
    );

    let mut term = Terminal::new()?;
    let result = App::new(slides, carousel).run(&mut term);
    drop(term);

    if let Err(e) = &result {
        log::error!("[tui] exited with error: {}", e);
    }
    result
}

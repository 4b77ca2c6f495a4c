//! Draws the carousel into the terminal.

use std::io::{self, Write};

use carousel::label::{dot_label, NEXT_LABEL, PREV_LABEL};
use carousel::{Carousel, Projection, Slides};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::layout::{Layout, Rect};

const BORDER: Color = Color::Rgb {
    r: 90,
    g: 90,
    b: 110,
};
const MUTED: Color = Color::Rgb {
    r: 150,
    g: 150,
    b: 165,
};
const ACCENT: Color = Color::Rgb {
    r: 235,
    g: 235,
    b: 245,
};

/// One slide pre-rendered at viewport size, one `char` per cell.
struct SlideCells {
    rows: Vec<Vec<char>>,
}

impl SlideCells {
    fn render(label: &str, source: &str, width: u16, height: u16) -> Self {
        let width = width as usize;
        let height = height as usize;
        let mut rows = vec![vec![' '; width]; height];

        for row in rows.iter_mut() {
            if let Some(first) = row.first_mut() {
                *first = '│';
            }
            if let Some(last) = row.last_mut() {
                *last = '│';
            }
        }

        let mid = height / 2;
        if height >= 3 {
            place_centered(&mut rows[mid - 1], label);
            place_centered(&mut rows[mid + 1], source);
        } else if let Some(row) = rows.get_mut(mid) {
            place_centered(row, label);
        }
        Self { rows }
    }

    fn cell(&self, col: usize, row: usize) -> char {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(' ')
    }
}

/// Write `text` centered into `row`, replacing cells that are not one column wide.
fn place_centered(row: &mut [char], text: &str) {
    let inner = row.len().saturating_sub(2);
    let text_width = text.width().min(inner);
    let start = 1 + (inner - text_width) / 2;
    for (offset, ch) in text.chars().take(inner).enumerate() {
        let Some(cell) = row.get_mut(start + offset) else {
            break;
        };
        *cell = if ch.width() == Some(1) { ch } else { '?' };
    }
}

/// Render one frame with the strip shifted by the eased `translate_percent`.
pub fn draw<W: Write>(
    out: &mut W,
    layout: &Layout,
    slides: &Slides<String>,
    carousel: &Carousel,
    translate_percent: f32,
    hovered_dot: Option<usize>,
) -> io::Result<()> {
    let projection = Projection {
        translate_percent,
        ..carousel.projection()
    };
    draw_title(out, layout.title, slides.title())?;
    draw_border(out, layout.frame)?;
    draw_strip(out, layout.viewport, slides, &projection)?;
    draw_controls(out, layout, carousel)?;
    draw_caption(out, layout.caption, carousel, hovered_dot)?;
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))
}

fn draw_title<W: Write>(out: &mut W, area: Rect, title: &str) -> io::Result<()> {
    let text = format!("{}  (←/→ or drag, q to quit)", title);
    queue!(
        out,
        MoveTo(area.x, area.y),
        SetAttribute(Attribute::Bold),
        SetForegroundColor(ACCENT),
        Print(pad(&text, area.width)),
        SetAttribute(Attribute::Reset)
    )
}

fn draw_border<W: Write>(out: &mut W, area: Rect) -> io::Result<()> {
    if area.width < 2 || area.height < 2 {
        return Ok(());
    }
    let inner = "─".repeat(area.width as usize - 2);
    queue!(
        out,
        SetForegroundColor(BORDER),
        MoveTo(area.x, area.y),
        Print(format!("╭{}╮", inner)),
        MoveTo(area.x, area.bottom() - 1),
        Print(format!("╰{}╯", inner))
    )?;
    for y in area.y + 1..area.bottom() - 1 {
        queue!(
            out,
            MoveTo(area.x, y),
            Print('│'),
            MoveTo(area.right() - 1, y),
            Print('│')
        )?;
    }
    Ok(())
}

fn draw_strip<W: Write>(
    out: &mut W,
    viewport: Rect,
    slides: &Slides<String>,
    projection: &Projection,
) -> io::Result<()> {
    if viewport.width == 0 || viewport.height == 0 {
        return Ok(());
    }
    let width = viewport.width as i32;
    let cells: Vec<SlideCells> = slides
        .items()
        .iter()
        .enumerate()
        .map(|(i, source)| {
            SlideCells::render(
                &slides.item_label(i),
                source,
                viewport.width,
                viewport.height,
            )
        })
        .collect();

    // A -100% translation moves the strip one viewport to the left
    let shift = projection.offset_in(width as f32).round() as i32;

    queue!(out, SetForegroundColor(MUTED))?;
    for row in 0..viewport.height {
        let line: String = (0..width)
            .map(|col| {
                let strip_x = col - shift;
                let item = strip_x.div_euclid(width);
                let item_col = strip_x.rem_euclid(width) as usize;
                usize::try_from(item)
                    .ok()
                    .and_then(|i| cells.get(i))
                    .map_or(' ', |slide| slide.cell(item_col, row as usize))
            })
            .collect();
        queue!(out, MoveTo(viewport.x, viewport.y + row), Print(line))?;
    }
    Ok(())
}

fn draw_controls<W: Write>(out: &mut W, layout: &Layout, carousel: &Carousel) -> io::Result<()> {
    if !carousel.has_controls() {
        return Ok(());
    }
    queue!(out, SetForegroundColor(ACCENT))?;
    if let Some(prev) = layout.prev {
        queue!(out, MoveTo(prev.x, prev.y), Print(" ‹ "))?;
    }
    if let Some(next) = layout.next {
        queue!(out, MoveTo(next.x, next.y), Print(" › "))?;
    }
    for (i, dot) in layout.dots.iter().enumerate() {
        let glyph = if carousel.is_active(i) { '●' } else { '○' };
        queue!(out, MoveTo(dot.x, dot.y), Print(glyph))?;
    }
    if let Some(indicator) = layout.indicator {
        let text = format!(" {} ", carousel.position_indicator());
        queue!(
            out,
            MoveTo(indicator.x, indicator.y),
            Print(pad_left(&text, indicator.width))
        )?;
    }
    Ok(())
}

fn draw_caption<W: Write>(
    out: &mut W,
    area: Rect,
    carousel: &Carousel,
    hovered_dot: Option<usize>,
) -> io::Result<()> {
    let text = if let Some(dot) = hovered_dot {
        format!("{}  ·  {}", carousel.label(), dot_label(dot))
    } else if carousel.has_controls() {
        format!(
            "{}  ·  {}  [{} | {}]",
            carousel.label(),
            carousel.item_label(carousel.index()),
            PREV_LABEL,
            NEXT_LABEL
        )
    } else {
        format!("{}  ·  {}", carousel.label(), carousel.item_label(0))
    };
    queue!(
        out,
        MoveTo(area.x, area.y),
        SetForegroundColor(MUTED),
        Print(pad(&text, area.width))
    )
}

/// Truncate or right-pad `text` to exactly `width` columns.
fn pad(text: &str, width: u16) -> String {
    let width = width as usize;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

fn pad_left(text: &str, width: u16) -> String {
    let used = text.width().min(width as usize);
    format!("{}{}", " ".repeat(width as usize - used), pad(text, used as u16))
}

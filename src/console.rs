//! Interactive console menu over the drawing store.
//!
//! Everything here is presentation: input is prompted, validated, and
//! handed to the store's public operations. User-facing text goes to
//! stdout/stderr; the structured log stays on `tracing`.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::drawing::Drawing;
use crate::shapes::Figure;

const MENU: [&str; 8] = [
    "Create Circle",
    "Create Rectangle",
    "Create Line",
    "Save and Exit",
    "Delete figure",
    "Translate figure",
    "Show all figures",
    "Show Within",
];

/// Run the menu loop until the user saves and exits (or stdin closes).
pub fn run(drawing: &mut Drawing) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("\n--- SVG Shape Creator Menu ---");
        for (number, item) in MENU.iter().enumerate() {
            println!("{}. {item}", number + 1);
        }

        let Some(choice) = prompt_i32(&mut input, "Choose an option: ")? else {
            println!("\nInput closed, exiting without saving.");
            return Ok(());
        };

        match choice {
            1 => create_circle(&mut input, drawing)?,
            2 => create_rectangle(&mut input, drawing)?,
            3 => create_line(&mut input, drawing)?,
            4 => {
                drawing.save_to_file()?;
                println!("All figures saved to {}", drawing.path().display());
                return Ok(());
            }
            5 => delete_figure(&mut input, drawing)?,
            6 => translate_figures(&mut input, drawing)?,
            7 => show_all(drawing),
            8 => show_within(&mut input, drawing)?,
            _ => eprintln!("ERROR: Invalid option. Please try again."),
        }
    }
}

fn create_circle(input: &mut impl BufRead, drawing: &mut Drawing) -> Result<()> {
    println!("--- Create Circle ---");
    let Some(x) = prompt_i32(input, "Enter x position: ")? else {
        return Ok(());
    };
    let Some(y) = prompt_i32(input, "Enter y position: ")? else {
        return Ok(());
    };
    let Some(radius) = prompt_i32(input, "Enter radius: ")? else {
        return Ok(());
    };
    let Some(fill) = prompt_token(input, "Enter fill color: ")? else {
        return Ok(());
    };
    match Figure::circle(x, y, radius, fill) {
        Ok(figure) => {
            drawing.add_figure(figure);
            println!("Circle added to the drawing.");
        }
        Err(e) => eprintln!("ERROR: {e}"),
    }
    Ok(())
}

fn create_rectangle(input: &mut impl BufRead, drawing: &mut Drawing) -> Result<()> {
    println!("--- Create Rectangle ---");
    let Some(x) = prompt_i32(input, "Enter x position: ")? else {
        return Ok(());
    };
    let Some(y) = prompt_i32(input, "Enter y position: ")? else {
        return Ok(());
    };
    let Some(width) = prompt_i32(input, "Enter width: ")? else {
        return Ok(());
    };
    let Some(height) = prompt_i32(input, "Enter height: ")? else {
        return Ok(());
    };
    let Some(fill) = prompt_token(input, "Enter fill color: ")? else {
        return Ok(());
    };
    match Figure::rectangle(x, y, width, height, fill) {
        Ok(figure) => {
            drawing.add_figure(figure);
            println!("Rectangle added to the drawing.");
        }
        Err(e) => eprintln!("ERROR: {e}"),
    }
    Ok(())
}

fn create_line(input: &mut impl BufRead, drawing: &mut Drawing) -> Result<()> {
    println!("--- Create Line ---");
    let Some(x1) = prompt_i32(input, "Enter x1: ")? else {
        return Ok(());
    };
    let Some(y1) = prompt_i32(input, "Enter y1: ")? else {
        return Ok(());
    };
    let Some(x2) = prompt_i32(input, "Enter x2: ")? else {
        return Ok(());
    };
    let Some(y2) = prompt_i32(input, "Enter y2: ")? else {
        return Ok(());
    };
    let Some(stroke) = prompt_token(input, "Enter stroke color: ")? else {
        return Ok(());
    };
    match Figure::line(x1, y1, x2, y2, stroke) {
        Ok(figure) => {
            drawing.add_figure(figure);
            println!("Line added to the drawing.");
        }
        Err(e) => eprintln!("ERROR: {e}"),
    }
    Ok(())
}

fn delete_figure(input: &mut impl BufRead, drawing: &mut Drawing) -> Result<()> {
    if drawing.is_empty() {
        println!("No figures available to delete.");
        return Ok(());
    }

    println!("\n--- Delete Figure ---\nAvailable figures:");
    list_figures(&drawing.all_figures());

    let max = drawing.figure_count();
    let prompt = format!("Enter the number of the figure to delete (1-{max}), or 0 to cancel: ");
    let Some(index) = prompt_index(input, &prompt, max)? else {
        return Ok(());
    };
    if index == 0 {
        println!("Deletion cancelled.");
        return Ok(());
    }

    if let Some(removed) = drawing.remove_figure(index) {
        println!("Removed figure #{index}: {}", removed.kind());
        drawing.save_to_file()?;
        println!("File updated.");
    }
    Ok(())
}

fn translate_figures(input: &mut impl BufRead, drawing: &mut Drawing) -> Result<()> {
    if drawing.is_empty() {
        println!("No figures available to translate.");
        return Ok(());
    }

    println!("\n--- Translate Figure(s) ---\nAvailable figures:");
    list_figures(&drawing.all_figures());

    let max = drawing.figure_count();
    let prompt =
        format!("Enter the number of the figure to translate (1-{max}), or 0 to translate all: ");
    let Some(index) = prompt_index(input, &prompt, max)? else {
        return Ok(());
    };
    let Some(dx) = prompt_i32(input, "Enter horizontal translation (dx): ")? else {
        return Ok(());
    };
    let Some(dy) = prompt_i32(input, "Enter vertical translation (dy): ")? else {
        return Ok(());
    };

    if index == 0 {
        drawing.translate_all(dx, dy);
        println!("Translated all figures by dx={dx}, dy={dy}.");
    } else if drawing.translate_figure(index, dx, dy) {
        if let Some(figure) = drawing.figure(index) {
            println!("Translation complete for figure #{index}: {figure}");
        }
    }
    drawing.save_to_file()?;
    println!("File updated.");
    Ok(())
}

fn show_all(drawing: &Drawing) {
    println!("\n--- All Figures ---");
    let figures = drawing.all_figures();
    if figures.is_empty() {
        println!("No figures to display.");
    } else {
        list_figures(&figures);
    }
}

fn show_within(input: &mut impl BufRead, drawing: &Drawing) -> Result<()> {
    let kind = loop {
        let Some(token) = prompt_token(input, "Enter boundary type (rectangle or circle): ")?
        else {
            return Ok(());
        };
        let token = token.to_lowercase();
        if token == "rectangle" || token == "circle" {
            break token;
        }
        eprintln!("ERROR: Invalid type. Please enter 'rectangle' or 'circle'.");
    };

    let Some(x) = prompt_i32(input, "Enter boundary x: ")? else {
        return Ok(());
    };
    let Some(y) = prompt_i32(input, "Enter boundary y: ")? else {
        return Ok(());
    };
    let (p1, p2) = if kind == "rectangle" {
        let Some(width) = prompt_i32(input, "Enter boundary width: ")? else {
            return Ok(());
        };
        let Some(height) = prompt_i32(input, "Enter boundary height: ")? else {
            return Ok(());
        };
        if width < 0 || height < 0 {
            eprintln!("ERROR: Width and height cannot be negative.");
            return Ok(());
        }
        (width, height)
    } else {
        let Some(radius) = prompt_i32(input, "Enter boundary radius: ")? else {
            return Ok(());
        };
        if radius < 0 {
            eprintln!("ERROR: Radius cannot be negative.");
            return Ok(());
        }
        (radius, 0)
    };

    let found = drawing.figures_within(&kind, x, y, p1, p2);
    if kind == "rectangle" {
        println!("\n> within {kind} {x} {y} {p1} {p2}");
    } else {
        println!("\n> within {kind} {x} {y} {p1}");
    }
    if found.is_empty() {
        println!("No figures found completely within the specified region.");
    } else {
        list_figures(&found);
    }
    Ok(())
}

fn list_figures(figures: &[Figure]) {
    for (index, figure) in figures.iter().enumerate() {
        println!("{}. {figure}", index + 1);
    }
}

/// Prompt until the user enters an integer. `Ok(None)` means stdin
/// closed.
fn prompt_i32(input: &mut impl BufRead, prompt: &str) -> Result<Option<i32>> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => eprintln!("ERROR: Invalid input. Please enter a number."),
        }
    }
}

/// Prompt for a single non-empty token (e.g. a color name).
fn prompt_token(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.split_whitespace().next() {
            Some(token) => return Ok(Some(token.to_string())),
            None => eprintln!("ERROR: Input cannot be empty."),
        }
    }
}

/// Prompt for an index in 0..=max; 0 carries a caller-defined meaning
/// (cancel, or "all figures").
fn prompt_index(input: &mut impl BufRead, prompt: &str, max: usize) -> Result<Option<usize>> {
    loop {
        let Some(value) = prompt_i32(input, prompt)? else {
            return Ok(None);
        };
        if value >= 0 && value as usize <= max {
            return Ok(Some(value as usize));
        }
        eprintln!("ERROR: Invalid index. Must be between 0 and {max}.");
    }
}

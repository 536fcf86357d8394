use std::{
    io::{self, Write},
    mem, thread,
    time::Duration,
};

use crossterm::{
    cursor::{Hide, RestorePosition, SavePosition, Show},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};

use crate::world::{World, N};

type Err = Box<dyn std::error::Error>;
type Result<T> = std::result::Result<T, Err>;

pub struct App {
    world: World,
    scratch: World,
    generations: u32,
    frame_delay: Duration,
}

impl App {
    #[inline]
    pub fn new(world: World, generations: u32, frame_delay_ms: u64) -> Self {
        App {
            world,
            scratch: World::new(),
            generations,
            frame_delay: Duration::from_millis(frame_delay_ms),
        }
    }
}

pub fn run(a: App) -> Result<()> {
    runup()?;
    let d = draw(a);
    shutdown()?;
    d?;
    Ok(())
}

fn runup() -> Result<()> {
    // Each rendered row is N glyph+space pairs wide.
    if let Ok((w, h)) = terminal::size() {
        if (w as usize) < 2 * N || (h as usize) < N {
            return Err("terminal should be bigger than the world!".into());
        }
    }
    execute!(io::stderr(), EnterAlternateScreen, SetTitle("Bounded life"), Hide)?;
    execute!(io::stdout(), SavePosition)?;
    Ok(())
}

fn shutdown() -> Result<()> {
    execute!(io::stderr(), LeaveAlternateScreen, Show)?;
    Ok(())
}

fn draw(mut a: App) -> Result<()> {
    for _ in 0..a.generations {
        frame(&a.world)?;
        a.world.step_into(&mut a.scratch);
        mem::swap(&mut a.world, &mut a.scratch);
        thread::sleep(a.frame_delay);
    }
    frame(&a.world)?;
    Ok(())
}

fn frame(world: &World) -> Result<()> {
    let mut out = io::stdout();
    execute!(out, RestorePosition)?;
    out.write_all(world.render().as_bytes())?;
    out.flush()?;
    Ok(())
}

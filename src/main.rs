use bounded_life::{
    draw::{self, App},
    patterns::GLIDER,
    world::World,
};

#[cfg(debug_assertions)]
#[global_allocator]
static ALLOCATOR: bounded_life::memcount::CountingAlloc = bounded_life::memcount::CountingAlloc;

const GENERATIONS: u32 = 80;
const FRAME_DELAY_MS: u64 = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let w = World::from_pattern(&GLIDER);
    let a = App::new(w, GENERATIONS, FRAME_DELAY_MS);
    draw::run(a)?;

    #[cfg(debug_assertions)]
    println!(
        "{} allocations {} frees",
        bounded_life::memcount::allocs(),
        bounded_life::memcount::frees()
    );

    Ok(())
}

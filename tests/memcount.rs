use bounded_life::memcount::{self, CountingAlloc};
use bounded_life::world::World;

#[global_allocator]
static ALLOCATOR: CountingAlloc = CountingAlloc;

#[test]
fn world_buffers_are_counted_and_released() {
    let allocs_before = memcount::allocs();
    let frees_before = memcount::frees();

    let world = World::new();
    let scratch = world.clone();
    drop(world);
    drop(scratch);

    assert!(memcount::allocs() >= allocs_before + 2);
    assert!(memcount::frees() >= frees_before + 2);
}

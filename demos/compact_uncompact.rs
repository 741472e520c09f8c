use hexsphere::{
  children_at, children_count, compact, get_resolution, k_ring, parse_cell, uncompact, uncompact_size, GridError,
};

fn main() -> Result<(), GridError> {
  let parent = parse_cell("8428309ffffffff")?;
  println!("Parent {parent} at res {}", get_resolution(parent));

  let child_res = 6;
  let children: Vec<_> = children_at(parent, child_res)?.collect();
  println!("{} children at res {child_res} (expected {})", children.len(), children_count(parent, child_res)?);

  let compacted = compact(&children)?;
  assert_eq!(compacted, vec![parent]);
  println!("Children compact back to {parent}");

  let restored = uncompact(&compacted, child_res)?;
  assert_eq!(restored.len(), children.len());
  println!("Uncompacted back to {} cells", restored.len());

  // a disk compacts into a mix of resolutions
  let disk = k_ring(children[0], 8)?;
  let compacted = compact(&disk)?;
  println!("Disk of {} cells compacts to {}:", disk.len(), compacted.len());
  for cell in &compacted {
    println!("  {cell} (res {})", get_resolution(*cell));
  }
  println!(
    "Uncompacting restores {} cells",
    uncompact_size(&compacted, get_resolution(disk[0]))?
  );

  Ok(())
}

use hexsphere::{
  geo_to_cell, grid_path_cells, grid_ring, k_ring_distances, max_k_ring_size, GeoCoord, GridError,
};

fn main() -> Result<(), GridError> {
  let origin = geo_to_cell(&GeoCoord::from_degrees(37.779, -122.419), 7)?;
  let k = 2;
  println!("Origin {origin}, k = {k}, at most {} cells", max_k_ring_size(k)?);

  let disk = k_ring_distances(origin, k)?;
  for (cell, distance) in &disk {
    println!("  {cell} at distance {distance}");
  }
  println!("{} cells in the disk", disk.len());

  let ring = grid_ring(origin, k)?;
  println!("{} cells on ring {k}", ring.len());

  if let Some((far, _)) = disk.last() {
    let path = grid_path_cells(origin, *far)?;
    let path: Vec<String> = path.iter().map(ToString::to_string).collect();
    println!("Path to {far}: {}", path.join(" -> "));
  }

  Ok(())
}

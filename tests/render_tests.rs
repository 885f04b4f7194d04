use rand::SeedableRng;
use rand::rngs::StdRng;

use elcellomata::grid::Grid;
use elcellomata::render;
use elcellomata::rule::RuleTable;

/// Rule 30 from a single live cell is a widely published pattern; the first
/// four generations on a 5-cell ring are fully computable by hand.
#[test]
fn rule_30_single_seed_history() -> anyhow::Result<()> {
    let rules = RuleTable::new(30);
    let grid = Grid::from_seed_row(vec![1, 0, 0, 0, 0], 4, &rules)?;

    let mut out = Vec::new();
    grid.write_text(&mut out)?;
    let text = String::from_utf8(out)?;

    insta::assert_snapshot!("rule_30_single_seed_history", text);

    Ok(())
}

#[test]
fn full_pipeline_produces_a_well_formed_image() -> anyhow::Result<()> {
    let rules = RuleTable::new(110);
    let mut rng = StdRng::seed_from_u64(42);
    let grid = Grid::generate(render::GRID_WIDTH, render::GRID_HEIGHT, &rules, &mut rng)?;

    let canvas = render::render(&grid, &rules);
    let svg = canvas.to_svg_string();

    assert_eq!(canvas.width(), 1785.0);
    assert_eq!(canvas.height(), 2385.0);

    assert!(svg.starts_with("<?xml version=\"1.0\""));
    assert!(svg.contains("fill=\"white\""));
    assert!(svg.trim_end().ends_with("</svg>"));

    // The legend is always present: 8 entries of 4 circles each.
    assert!(svg.matches("<circle").count() >= 32);

    Ok(())
}

#[test]
fn rendering_is_deterministic_after_the_seed_row() -> anyhow::Result<()> {
    let rules = RuleTable::new(90);
    let row: Vec<u8> = (0..32).map(|j| (j % 3 == 0) as u8).collect();

    let a = Grid::from_seed_row(row.clone(), 16, &rules)?;
    let b = Grid::from_seed_row(row, 16, &rules)?;

    assert_eq!(
        render::render(&a, &rules).to_svg_string(),
        render::render(&b, &rules).to_svg_string()
    );

    Ok(())
}

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use opforge::batch::RosterOutcome;
use opforge::calculator::{Breakdown, MetricsResult};
use opforge::casual::CasualResult;
use opforge::device::all_devices;
use opforge::division::{Division, Ladder};

fn division_color(division: Division) -> Color {
    match division {
        Division::Kugelblitz | Division::Radiance => Color::Magenta,
        Division::Firestorm | Division::Flashover => Color::Red,
        Division::Magnesium | Division::Thermite => Color::Cyan,
        Division::Propane | Division::Wood => Color::Yellow,
        Division::Ember => Color::DarkGrey,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Scores are shown truncated toward zero, the way players quote them.
fn whole(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

pub fn metrics(result: &MetricsResult, rounds_played: u32) {
    if let Some(extra) = result.penalty_rounds(rounds_played) {
        println!("\nauto-penalty: +{} rounds", extra);
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("OP").add_attribute(Attribute::Bold),
        Cell::new(whole(result.op)).fg(Color::Cyan),
    ]);
    table.add_row(vec![Cell::new("TP"), Cell::new(whole(result.tp))]);
    table.add_row(vec![Cell::new("SP"), Cell::new(whole(result.sp))]);
    table.add_row(vec![Cell::new("GO"), Cell::new(whole(result.go))]);
    table.add_row(vec![Cell::new("AD"), Cell::new(whole(result.ad))]);
    table.add_row(vec![Cell::new("XPR"), Cell::new(whole(result.xpr))]);
    table.add_row(vec![Cell::new("SDI"), Cell::new(format!("{:.4}", result.sdi))]);
    table.add_row(vec![
        Cell::new("Division").add_attribute(Attribute::Bold),
        Cell::new(result.division.to_string()).fg(division_color(result.division)),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}

pub fn breakdown(b: &Breakdown) {
    let mut table = new_table();
    table.set_header(vec!["Step", "Value"]);

    let rows: [(&str, String); 11] = [
        ("Rounds played", b.rounds_played.to_string()),
        ("Rounds adjusted", b.rounds_adjusted.to_string()),
        ("Rounds gamified", b.rounds_gamified.to_string()),
        ("TP/SP divisor", format!("{:.0}", b.round_divisor)),
        ("S_ma", format!("{:.4}", b.s_ma)),
        ("S_mb", format!("{:.4}", b.s_mb)),
        ("TP + SP", format!("{:.3}", b.radicand)),
        ("OP (unboosted)", format!("{:.3}", b.raw_op)),
        ("Device boost", format!("x{:.3}", b.device_multiplier)),
        ("Divisor clamped", b.divisor_clamped.to_string()),
        ("Radicand clamped", b.radicand_clamped.to_string()),
    ];
    for (step, value) in rows {
        table.add_row(vec![Cell::new(step), Cell::new(value)]);
    }
    println!("{}", table);
}

pub fn casual(result: &CasualResult) {
    println!("\n{}", result.scope);

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("OP").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.0}", result.op)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("TP"),
        Cell::new(format!("{:.0}", result.performance_score)),
    ]);
    table.add_row(vec![Cell::new("SP"), Cell::new(format!("{:.0}", result.z_factor))]);
    table.add_row(vec![
        Cell::new("GO"),
        Cell::new(format!("{:.0}", result.guard_objective)),
    ]);
    table.add_row(vec![
        Cell::new("AA"),
        Cell::new(format!("{:.0}", result.assassin_aggression)),
    ]);
    table.add_row(vec![
        Cell::new("AD"),
        Cell::new(format!("{:.0}", result.average_damage)),
    ]);
    table.add_row(vec![
        Cell::new("XPR"),
        Cell::new(format!("{:.0}", result.experience_per_round)),
    ]);
    table.add_row(vec![
        Cell::new("Division").add_attribute(Attribute::Bold),
        Cell::new(result.division.to_string()).fg(division_color(result.division)),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("{}", table);
}

pub fn roster(outcomes: &[RosterOutcome]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("OP").fg(Color::Cyan),
        Cell::new("TP"),
        Cell::new("SP"),
        Cell::new("AD"),
        Cell::new("XPR"),
        Cell::new("Penalty"),
        Cell::new("Division").add_attribute(Attribute::Bold),
    ]);

    for i in [0, 2, 3, 4, 5, 6, 7] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, outcome) in outcomes.iter().enumerate() {
        match &outcome.result {
            Ok(r) => {
                table.add_row(vec![
                    Cell::new(rank + 1),
                    Cell::new(&outcome.player).add_attribute(Attribute::Bold),
                    Cell::new(whole(r.op)).fg(Color::Cyan),
                    Cell::new(whole(r.tp)),
                    Cell::new(whole(r.sp)),
                    Cell::new(whole(r.ad)),
                    Cell::new(whole(r.xpr)),
                    Cell::new(r.auto_penalty.map_or_else(String::new, |p| p.to_string())),
                    Cell::new(r.division.to_string()).fg(division_color(r.division)),
                ]);
            }
            Err(e) => {
                table.add_row(vec![
                    Cell::new("-"),
                    Cell::new(&outcome.player),
                    Cell::new(format!("error: {}", e)).fg(Color::Red),
                ]);
            }
        }
    }
    println!("\n{}", table);
}

pub fn divisions() {
    let mut table = new_table();
    table.set_header(vec!["Division", "Competitive OP", "Casual OP"]);

    let competitive = Ladder::Competitive.cutoffs();
    let casual = Ladder::Casual.cutoffs();
    for (c, k) in competitive.iter().zip(casual.iter()) {
        table.add_row(vec![
            Cell::new(c.1.to_string()).fg(division_color(c.1)),
            Cell::new(format!(">= {:.0}", c.0)),
            Cell::new(format!(">= {:.0}", k.0)),
        ]);
    }
    table.add_row(vec![
        Cell::new(Division::Ember.to_string()).fg(division_color(Division::Ember)),
        Cell::new(format!("< {:.0}", competitive[competitive.len() - 1].0)),
        Cell::new(format!("< {:.0}", casual[casual.len() - 1].0)),
    ]);
    println!("{}", table);

    let mut boosts = new_table();
    boosts.set_header(vec!["Device", "OP boost"]);
    for (device, multiplier) in all_devices() {
        boosts.add_row(vec![
            Cell::new(device.to_string()),
            Cell::new(format!("x{:.3}", multiplier)),
        ]);
    }
    println!("{}", boosts);
}

use autoyahtzee::consts::{BONUS_POINTS, BONUS_THRESHOLD};
use autoyahtzee::decision::RerollEvaluation;
use autoyahtzee::dice::RerollMask;
use autoyahtzee::game::{ExperimentReport, GameRecord};
use autoyahtzee::scorer::ScoreLine;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_scorecard(lines: &[ScoreLine], upper_total: u32, bonus: u32, total: u32) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Points").fg(Color::Cyan),
        Cell::new("Max"),
        Cell::new("Dice"),
    ]);
    right_align(&mut table, 1..=2);

    for line in lines {
        let dice = line.dice.map(|d| d.to_string()).unwrap_or_default();
        let points = Cell::new(line.points);
        let points = if line.dice.is_some() && line.points == line.cap {
            points.fg(Color::Green)
        } else {
            points
        };
        table.add_row(vec![
            Cell::new(line.category),
            points,
            Cell::new(line.cap),
            Cell::new(dice),
        ]);
    }

    table.add_row(vec![
        Cell::new("Upper"),
        Cell::new(upper_total),
        Cell::new(BONUS_THRESHOLD),
        Cell::new(""),
    ]);
    let bonus_cell = if bonus > 0 {
        Cell::new(bonus).fg(Color::Green)
    } else {
        Cell::new(bonus)
    };
    table.add_row(vec![
        Cell::new("Bonus"),
        bonus_cell,
        Cell::new(BONUS_POINTS),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
    ]);

    println!("\n{}", table);
}

pub fn print_game(record: &GameRecord) {
    match record.seed {
        Some(seed) => println!("\nGame (seed {})", seed),
        None => println!("\nGame"),
    }
    print_scorecard(
        &record.scorecard,
        record.upper_total,
        record.bonus,
        record.total,
    );
}

fn summary_header(table: &mut Table, first: Vec<Cell>) {
    let mut header = first;
    header.extend([
        Cell::new("Games"),
        Cell::new("Max").fg(Color::Green),
        Cell::new("Min").fg(Color::Red),
        Cell::new("Mean").fg(Color::Cyan),
        Cell::new("Median"),
        Cell::new("StdDev"),
        Cell::new("Time (s)"),
    ]);
    table.add_row(header);
}

fn summary_cells(report: &ExperimentReport) -> Vec<Cell> {
    let s = &report.summary;
    vec![
        Cell::new(s.games),
        Cell::new(s.max).fg(Color::Green),
        Cell::new(s.min).fg(Color::Red),
        Cell::new(format!("{:.2}", s.mean)).fg(Color::Cyan),
        Cell::new(format!("{:.1}", s.median)),
        Cell::new(format!("{:.2}", s.stddev)),
        Cell::new(format!("{:.2}", report.elapsed.as_secs_f64())),
    ]
}

pub fn print_summary(report: &ExperimentReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary_header(
        &mut table,
        vec![Cell::new("Reroll"), Cell::new("Choice")],
    );
    right_align(&mut table, 2..=8);

    let mut row = vec![
        Cell::new(report.options.reroll_policy),
        Cell::new(report.options.choice_policy),
    ];
    row.extend(summary_cells(report));
    table.add_row(row);

    println!("\n{}", table);
}

pub fn print_sweep(reports: &[ExperimentReport]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary_header(
        &mut table,
        vec![Cell::new("Reroll"), Cell::new("Choice")],
    );
    right_align(&mut table, 2..=8);

    let best_mean = reports
        .iter()
        .map(|r| r.summary.mean)
        .fold(f64::MIN, f64::max);

    for report in reports {
        let mut row = vec![
            Cell::new(report.options.reroll_policy),
            Cell::new(report.options.choice_policy),
        ];
        if report.summary.mean == best_mean {
            row[0] = row[0].clone().add_attribute(Attribute::Bold);
            row[1] = row[1].clone().add_attribute(Attribute::Bold);
        }
        row.extend(summary_cells(report));
        table.add_row(row);
    }

    println!("\n{}", table);
}

pub fn print_reroll_ranking(evaluations: &[RerollEvaluation], chosen: RerollMask) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Bits"),
        Cell::new("Reroll").add_attribute(Attribute::Bold),
        Cell::new("Outcomes"),
        Cell::new("Expected").fg(Color::Cyan),
        Cell::new("Best"),
        Cell::new("Best Hand"),
        Cell::new("Time (ms)"),
    ]);
    right_align(&mut table, 2..=4);
    if let Some(col) = table.column_mut(0) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for e in evaluations {
        let expected = Cell::new(format!("{:.4}", e.expected));
        let expected = if e.mask == chosen {
            expected.fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            expected
        };
        table.add_row(vec![
            Cell::new(e.mask.bits()),
            Cell::new(e.mask),
            Cell::new(e.outcomes),
            expected,
            Cell::new(e.best_choice.value),
            Cell::new(format!("{} {}", e.best_choice.category, e.best_dice)),
            Cell::new(format!("{:.3}", e.elapsed.as_secs_f64() * 1000.0)),
        ]);
    }

    println!("\n{}", table);
}

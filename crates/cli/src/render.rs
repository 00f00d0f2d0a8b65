use anyhow::Result;
use geomancy_chart::{Chart, Indications, JUDGE};
use geomancy_figures::Figure;

/// Height of a drawn figure
const FIGURE_LINES: usize = 4;

/// Draw `figure` as four centred lines of `letter`, `width` columns wide.
///
/// Active lines are a single point, passive lines two.
pub fn text_figure(figure: Figure, letter: char, width: usize) -> String {
    [figure.fire(), figure.air(), figure.water(), figure.earth()]
        .iter()
        .map(|&active| {
            let mut line = if active {
                letter.to_string()
            } else {
                format!("{letter} {letter}")
            };
            while line.chars().count() < width {
                if line.chars().count() % 2 == 1 {
                    line.insert(0, ' ');
                } else {
                    line.push(' ');
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lay out rows of drawn figures side by side; rows are separated by a blank line
fn join_blocks(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| {
            let split: Vec<Vec<&str>> = row.iter().map(|block| block.lines().collect()).collect();
            (0..FIGURE_LINES)
                .map(|ix| {
                    split
                        .iter()
                        .map(|lines| lines.get(ix).copied().unwrap_or_default())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn figure_row(
    chart: &Chart,
    positions: impl Iterator<Item = usize>,
    width: usize,
) -> Result<Vec<String>> {
    let row = positions
        .map(|position| {
            chart
                .house(position)
                .map(|house| text_figure(house.figure, '*', width))
        })
        .collect::<geomancy_chart::Result<Vec<_>>>()?;
    Ok(row)
}

/// The shield read right to left: mothers and daughters, nieces, witnesses, judge
pub fn render_shield(chart: &Chart) -> Result<String> {
    let rows = vec![
        figure_row(chart, (0..8).rev(), 5)?,
        figure_row(chart, (8..12).rev(), 10)?,
        figure_row(chart, (12..JUDGE).rev(), 20)?,
        figure_row(chart, std::iter::once(JUDGE), 40)?,
    ];
    Ok(join_blocks(&rows))
}

/// The square house chart with the judge in the middle
pub fn render_house_chart(chart: &Chart) -> Result<String> {
    const WIDTH: usize = 7;
    let blank = vec![" ".repeat(WIDTH); FIGURE_LINES].join("\n");
    // traditional one-based house numbers; 15 is the judge
    let h = |house: usize| -> Result<String> {
        let figure = chart.house(house - 1)?.figure;
        Ok(text_figure(figure, '*', WIDTH))
    };

    let rows = vec![
        vec![blank.clone(), h(11)?, h(10)?, h(9)?, blank.clone()],
        vec![h(12)?, blank.clone(), blank.clone(), blank.clone(), h(8)?],
        vec![h(1)?, blank.clone(), h(JUDGE + 1)?, blank.clone(), h(7)?],
        vec![h(2)?, blank.clone(), blank.clone(), blank.clone(), h(6)?],
        vec![blank.clone(), h(3)?, h(4)?, h(5)?, blank],
    ];
    Ok(join_blocks(&rows))
}

/// Numbered list of the twelve houses with their figures drawn
pub fn render_house_list(chart: &Chart) -> Result<String> {
    let houses = chart.houses()?;
    let entries: Vec<String> = houses
        .iter()
        .map(|house| {
            format!(
                "{} {}\n{}",
                house.index + 1,
                house.figure.name(),
                text_figure(house.figure, '*', 3)
            )
        })
        .collect();
    Ok(entries.join("\n\n"))
}

/// One `position figure` line per house
pub fn render_house_names(chart: &Chart) -> Result<String> {
    let houses = chart.houses()?;
    Ok(houses
        .iter()
        .map(|house| format!("{} {}", house.index, house.figure.name()))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Indications as pretty JSON under a heading
pub fn render_indications(indications: &Indications) -> Result<String> {
    Ok(format!(
        "Indications\n------------\n{}",
        serde_json::to_string_pretty(indications)?
    ))
}

use geomancy_figures::{CompanyType, Figure, FigureError};
use pretty_assertions::assert_eq;

#[test]
fn every_figure_round_trips_through_its_encodings() {
    let figures: Vec<Figure> = Figure::all().collect();
    assert_eq!(figures.len(), 16);

    for figure in figures {
        assert_eq!(Figure::by_flags(figure.flags()), Ok(figure));
        assert_eq!(Figure::by_elements(figure.elements()), figure);
        assert_eq!(Figure::by_name(figure.name()), Ok(figure));
        assert_eq!(Figure::by_name(&figure.slug()), Ok(figure));
        assert_eq!(figure.to_string().parse::<Figure>(), Ok(figure));
    }
}

#[test]
fn names_are_unique() {
    let mut names: Vec<&str> = Figure::all().map(Figure::name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 16);
}

#[test]
fn zero_and_full_figures() {
    assert_eq!(Figure::by_flags(0), Ok(Figure::POPULUS));
    assert_eq!(Figure::by_flags(15), Ok(Figure::VIA));
    assert_eq!(Figure::POPULUS.active_points(), 0);
    assert_eq!(Figure::VIA.points(), 4);
    assert!(matches!(
        Figure::by_flags(16),
        Err(FigureError::NotFound(_))
    ));
}

#[test]
fn every_figure_is_strong_and_weak_exactly_once() {
    for figure in Figure::all() {
        let strengths: Vec<i32> = (0..12).map(|house| figure.strength(house)).collect();
        assert_eq!(strengths.iter().filter(|s| **s == 1).count(), 1, "{figure}");
        assert_eq!(strengths.iter().filter(|s| **s == -1).count(), 1, "{figure}");
    }
}

#[test]
fn capitular_company_follows_the_head() {
    for a in Figure::all() {
        for b in Figure::all() {
            if a.fire() != b.fire() {
                assert_ne!(a.company_type(b), Some(CompanyType::Capitular));
            }
        }
    }
}

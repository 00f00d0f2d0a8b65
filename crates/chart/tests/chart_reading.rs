use geomancy_chart::{Chart, ChartError, ChartSequence, Figure, House, HouseSystem, SHIELD_SLOTS};
use pretty_assertions::assert_eq;

fn chart(names: [&str; 4]) -> Chart {
    Chart::from_names(&names).expect("valid seeds")
}

#[test]
fn unset_sequence_is_all_populus() {
    let sequence = ChartSequence::new();
    for ix in 0..SHIELD_SLOTS {
        assert_eq!(sequence.get(ix).expect("slot"), Figure::POPULUS, "slot {ix}");
    }
}

#[test]
fn projection_of_known_seeds() {
    let chart = chart(["amisso", "conjunctio", "laetitia", "populus"]);
    let names: Vec<&str> = chart
        .shield()
        .iter()
        .map(|slot| slot.figure.name())
        .collect();
    assert_eq!(
        names,
        vec![
            "Amisso",
            "Conjunctio",
            "Laetitia",
            "Populus",
            "Amisso",
            "Rubeus",
            "Fortuna Minor",
            "Populus",
            "Fortuna Minor",
            "Laetitia",
            "Cauda Draconis",
            "Fortuna Minor",
            "Rubeus",
            "Albus",
            "Conjunctio",
        ]
    );
}

#[test]
fn houses_wrap_around_the_chart() {
    let sixth = House::new(6, Figure::VIA);
    assert!(sixth.is_next_to(5));
    assert!(!sixth.is_next_to(2));
    assert!(House::new(0, Figure::VIA).is_next_to(11));
}

#[test]
fn way_of_the_point_can_branch() {
    let chart = chart(["fortuna minor", "cauda draconis", "fortuna minor", "laetitia"]);
    let points: Vec<usize> = chart
        .way_of_the_point()
        .expect("way of the point")
        .iter()
        .map(|house| house.index)
        .collect();
    assert_eq!(points, vec![6, 7]);
}

#[test]
fn way_of_the_point_is_read_from_the_shield_under_any_house_system() {
    let chart = chart(["fortuna minor", "cauda draconis", "fortuna minor", "laetitia"])
        .with_house_system(HouseSystem::Astrological);
    let points: Vec<usize> = chart
        .way_of_the_point()
        .expect("way of the point")
        .iter()
        .map(|house| house.index)
        .collect();
    // daughters 3 and 4 are shown in houses 5 and 8
    assert_eq!(points, vec![4, 7]);
}

#[test]
fn way_of_the_point_single_terminal() {
    let chart = chart(["via", "populus", "conjunctio", "populus"]);
    let points = chart.way_of_the_point().expect("way of the point");
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].index, 0);
    assert_eq!(points[0].figure, Figure::VIA);
}

#[test]
fn way_of_the_point_can_be_lost() {
    // the nieces are Populus but every mother and daughter is Via
    let chart = chart(["via", "via", "via", "via"]);
    assert!(chart.way_of_the_point().expect("way of the point").is_empty());
}

#[test]
fn cloned_charts_are_independent() {
    let original = chart(["via", "populus", "conjunctio", "populus"]);
    let mut copy = original.clone();
    assert_eq!(copy.seeds(), original.seeds());

    copy.set_mother(3, Figure::VIA).expect("mother");
    copy.set_house_type("astrological").expect("house system");

    assert_eq!(original.seeds()[3], Figure::POPULUS);
    assert_eq!(original.house_system(), HouseSystem::Ordinary);
    assert_ne!(
        copy.house(14).expect("judge").figure,
        original.house(14).expect("judge").figure
    );
}

#[test]
fn mutating_a_mother_refreshes_every_house() {
    let mut chart = chart(["via", "populus", "conjunctio", "populus"]);
    let before = chart.houses().expect("houses");
    chart.set_mother(1, Figure::VIA).expect("mother");
    let after = chart.houses().expect("houses");

    let expected = Chart::from_figures([
        Figure::VIA,
        Figure::VIA,
        Figure::CONJUNCTIO,
        Figure::POPULUS,
    ])
    .houses()
    .expect("houses");
    assert_eq!(after, expected);
    assert_ne!(before, after);
}

#[test]
fn only_mothers_can_be_set() {
    let mut chart = Chart::default();
    assert!(matches!(
        chart.set_mother(4, Figure::VIA),
        Err(ChartError::InvalidAssignment(4))
    ));
    assert_eq!(chart.seeds(), [Figure::POPULUS; 4]);
}

#[test]
fn unknown_seed_names_are_rejected() {
    let err = Chart::from_names(&["via", "nonsense"]).unwrap_err();
    assert!(matches!(err, ChartError::Figure(_)));
    assert!(err.to_string().contains("nonsense"));
}

#[test]
fn index_and_part_of_fortune_on_a_via_chart() {
    let chart = chart(["via", "via", "via", "via"]);
    assert_eq!(chart.index().expect("index").index, 8);
    assert_eq!(chart.part_of_fortune().expect("part of fortune").index, 4);
}

#[test]
fn houses_serialize_with_strength() {
    let chart = chart(["puer", "populus", "populus", "populus"]);
    let json = serde_json::to_value(chart.house(0).expect("house")).expect("json");
    assert_eq!(json["figure"], "Puer");
    assert_eq!(json["querent"], true);
    assert_eq!(json["quesited"], false);
    assert_eq!(json["strength"], 1);
}

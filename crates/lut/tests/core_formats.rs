//! Integration tests for reading table files

use lutools_lut::{
    read_lut, read_lut_with_version, Dimension, Error, LutReader, Section, Table, VersionCheck,
};
use rstest::{fixture, rstest};

#[fixture]
fn ref_2d() -> Table {
    read_lut("./data/table_2d.lut").unwrap()
}

#[fixture]
fn ref_3d() -> Table {
    read_lut("./data/table_3d.lut").unwrap()
}

#[rstest]
fn parse_simple_2d(ref_2d: Table) {
    assert_eq!(ref_2d.dimension(), Dimension::Two);
    assert_eq!(ref_2d.n_levels(), 1);
    assert_eq!(ref_2d.n_variables(), 2);
    assert_eq!(ref_2d.names(), ["T", "Y_fuel"]);
    assert_eq!(ref_2d.version_lut(), "2.1.0");
    assert_eq!(ref_2d.version_target(), "2.1.0");
    assert_eq!(ref_2d.version_check(), VersionCheck::Match);

    let level = ref_2d.level(0).unwrap();
    assert_eq!(level.n_points(), 4);
    assert_eq!(level.n_triangles(), 2);
    assert_eq!(level.n_hull_points(), 4);
    assert_eq!(level.coordinate(), 0.0);
    assert_eq!(level.triangles(), [[0, 1, 2], [1, 2, 3]]);
    assert_eq!(level.hull(), [0, 1, 3, 2]);

    // columns are the property vectors of each point
    assert_eq!(level.data().shape(), (2, 4));
    assert_eq!(level.point(0), Some([300.0, 0.0].as_slice()));
    assert_eq!(level.point(3), Some([330.0, 0.3].as_slice()));
    assert_eq!(
        ref_2d.variable_values(0, "Y_fuel"),
        Some(vec![0.0, 0.1, 0.2, 0.3])
    );

    assert!(ref_2d.level(1).is_none());
    assert!(ref_2d.level_range().is_none());
}

#[rstest]
fn parse_simple_3d(ref_3d: Table) {
    assert_eq!(ref_3d.dimension(), Dimension::Three);
    assert_eq!(ref_3d.n_levels(), 2);
    assert_eq!(ref_3d.names(), ["T", "Y_fuel", "Density"]);
    assert_eq!(ref_3d.level_values(), vec![0.0, 0.5]);
    assert_eq!(ref_3d.level_range(), Some((0.0, 0.5)));

    let level = ref_3d.level(1).unwrap();
    assert_eq!(level.index(), 1);
    assert_eq!(level.n_points(), 5);
    assert_eq!(level.n_triangles(), 3);
    assert_eq!(level.data().shape(), (3, 5));
    assert_eq!(level.point(4), Some([975.0, 0.035, 0.37].as_slice()));
}

#[rstest]
#[case("./data/table_2d.lut")]
#[case("./data/table_3d.lut")]
#[case("./data/table_2d_filler.lut")]
fn structural_invariants(#[case] path: &str) {
    let table = read_lut(path).unwrap();

    for level in table.levels() {
        assert_eq!(level.data().nrows(), table.n_variables());
        assert!(level.triangles().iter().flatten().all(|&p| p < level.n_points()));
        assert!(level.hull().iter().all(|&p| p < level.n_points()));
    }

    match table.dimension() {
        Dimension::Two => assert_eq!(table.n_levels(), 1),
        Dimension::Three => {
            let values = table.level_values();
            let ascending = values.windows(2).all(|w| w[0] < w[1]);
            let descending = values.windows(2).all(|w| w[0] > w[1]);
            assert!(ascending || descending);
        }
    }
}

#[rstest]
fn filler_does_not_change_result(ref_2d: Table) {
    let filled = read_lut("./data/table_2d_filler.lut").unwrap();
    assert_eq!(filled, ref_2d);
}

#[rstest]
fn older_version_still_loads(ref_2d: Table) {
    let table = read_lut_with_version("./data/table_2d_v2.0.lut", "2.1").unwrap();
    assert_eq!(table.version_lut(), "2.0");
    assert_eq!(table.version_reader(), "2.1");
    assert_eq!(table.version_check(), VersionCheck::Older);

    let mismatch = table.version_mismatch().unwrap();
    assert_eq!(mismatch.declared, "2.0");
    assert_eq!(mismatch.known, "2.1");

    // nothing but the versions differ from a matching run
    assert_eq!(table.names(), ref_2d.names());
    assert_eq!(table.levels(), ref_2d.levels());
}

#[rstest]
#[case("2.1.0", VersionCheck::Match)]
#[case("2.2", VersionCheck::Older)]
#[case("1.0.1", VersionCheck::Newer)]
fn reader_version_policy(#[case] reader_version: &str, #[case] expected: VersionCheck) {
    let table = read_lut_with_version("./data/table_2d.lut", reader_version).unwrap();
    assert_eq!(table.version_check(), expected);
    assert_eq!(table.version_mismatch().is_none(), expected == VersionCheck::Match);
}

#[rstest]
fn triangle_index_out_of_range() {
    let err = read_lut("./data/bad_triangle.lut").unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedData {
            section: Section::Triangles,
            level: Some(0),
            line: 28,
            ..
        }
    ));
    assert!(err.to_string().contains("triangle 1 references point 4"));
}

#[rstest]
fn short_data_row() {
    let err = read_lut("./data/short_data.lut").unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedData {
            section: Section::Data,
            level: Some(0),
            line: 23,
            ..
        }
    ));
}

#[rstest]
fn missing_hull_section() {
    let err = read_lut("./data/missing_hull.lut").unwrap_err();
    assert!(matches!(err, Error::MissingSection { ref marker, .. } if marker == "<Hull>"));
}

#[rstest]
fn duplicate_variable_names() {
    let err = read_lut("./data/duplicate_names.lut").unwrap_err();
    assert!(matches!(err, Error::DuplicateVariable { ref name, line: 19 } if name == "T"));
}

#[rstest]
fn missing_file() {
    let err = read_lut("./data/does_not_exist.lut").unwrap_err();
    assert!(matches!(err, Error::FileAccess { .. }));
}

#[rstest]
fn non_coordinator_fails_identically() {
    let mut reader = LutReader::new();
    reader.set_coordinator(false);
    assert!(!reader.is_coordinator());

    let quiet = reader.parse("./data/bad_triangle.lut").unwrap_err();
    let loud = LutReader::new().parse("./data/bad_triangle.lut").unwrap_err();
    assert_eq!(quiet.to_string(), loud.to_string());
}

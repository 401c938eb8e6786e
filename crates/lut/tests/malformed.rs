//! Integration tests for structural problems in table files

use lutools_lut::{Error, LutReader, Result, Section, Table};
use rstest::rstest;
use std::io::Cursor;

const TABLE_2D: &str = "\
[Version]
2.1.0
[Reader version]
2.1.0
[Table dimension]
2
[Number of table levels]
1
[Levels]
4 2 4
[Variables]
2
1:T
2:Y_fuel
<Data>
300 310 320 330
0.0 0.1 0.2 0.3
</Data>
<Triangles>
0 1 2
1 2 3
</Triangles>
<Hull>
0 1 3 2
</Hull>
";

const TABLE_3D: &str = "\
[Version]
2.1.0
[Reader version]
2.1.0
[Table dimension]
3
[Number of table levels]
2
[Levels]
3 1 3 1.0
3 1 3 0.5
[Variables]
1
Z
<Data>
1 2 3
</Data>
<Triangles>
0 1 2
</Triangles>
<Hull>
0 1 2
</Hull>
<Data>
4 5 6
</Data>
<Triangles>
0 1 2
</Triangles>
<Hull>
0 1 2
</Hull>
";

fn load(text: &str) -> Result<Table> {
    LutReader::new().parse_from(Cursor::new(text))
}

fn section_of(err: &Error) -> Option<(Section, Option<usize>)> {
    match err {
        Error::MalformedData { section, level, .. } => Some((*section, *level)),
        _ => None,
    }
}

#[test]
fn in_memory_tables_load() {
    let table = load(TABLE_2D).unwrap();
    assert_eq!(table.level(0).unwrap().n_points(), 4);

    // descending levels are just as valid as ascending ones
    let table = load(TABLE_3D).unwrap();
    assert_eq!(table.level_values(), vec![1.0, 0.5]);
    assert_eq!(table.level(1).unwrap().point(2), Some([6.0].as_slice()));
}

#[test]
fn windows_line_endings() {
    let crlf = TABLE_2D.replace('\n', "\r\n");
    assert_eq!(load(&crlf).unwrap(), load(TABLE_2D).unwrap());
}

#[rstest]
#[case("[Version]")]
#[case("[Reader version]")]
#[case("[Table dimension]")]
#[case("[Number of table levels]")]
#[case("[Levels]")]
#[case("[Variables]")]
#[case("<Data>")]
#[case("</Data>")]
#[case("<Triangles>")]
#[case("</Triangles>")]
#[case("<Hull>")]
#[case("</Hull>")]
fn missing_sections(#[case] marker: &str) {
    let text = TABLE_2D.replace(&format!("{marker}\n"), "");
    let err = load(&text).unwrap_err();
    assert!(
        matches!(err, Error::MissingSection { .. }),
        "expected a missing section, got {err:?}"
    );
}

#[rstest]
#[case("[Table dimension]\n2", "[Table dimension]\n4", Section::Dimension, None)]
#[case("[Number of table levels]\n1", "[Number of table levels]\n2", Section::LevelCount, None)]
#[case("[Number of table levels]\n1", "[Number of table levels]\n0", Section::LevelCount, None)]
#[case("[Version]\n2.1.0", "[Version]\n2.1.0 beta", Section::Version, None)]
#[case("4 2 4", "0 2 4", Section::Levels, Some(0))]
#[case("4 2 4", "4 2 4 0.5", Section::Levels, Some(0))]
#[case("4 2 4", "4 two 4", Section::Levels, Some(0))]
#[case("[Variables]\n2", "[Variables]\n3", Section::Variables, None)]
#[case("[Variables]\n2", "[Variables]\n0", Section::Variables, None)]
#[case("300 310 320 330", "300 310 320 330 340", Section::Data, Some(0))]
#[case("300 310 320 330", "300 310 3x0 330", Section::Data, Some(0))]
#[case("300 310 320 330", "300 310 nan 330", Section::Data, Some(0))]
#[case("0.0 0.1 0.2 0.3\n", "0.0 0.1 0.2 0.3\n1 1 1 1\n", Section::Data, Some(0))]
#[case("1 2 3\n</Tri", "1 2 3\n2 3 0\n</Tri", Section::Triangles, Some(0))]
#[case("1 2 3\n</Tri", "1 2\n</Tri", Section::Triangles, Some(0))]
#[case("1 2 3\n</Tri", "1 2 -3\n</Tri", Section::Triangles, Some(0))]
#[case("0 1 3 2", "0 1 3", Section::Hull, Some(0))]
#[case("0 1 3 2", "0 1 3 2 0", Section::Hull, Some(0))]
#[case("0 1 3 2", "0 1 5 2", Section::Hull, Some(0))]
// declared counts far beyond the payload fail cleanly instead of allocating
#[case("4 2 4", "18446744073709551615 2 4", Section::Data, Some(0))]
#[case("4 2 4", "4 18446744073709551615 4", Section::Triangles, Some(0))]
#[case("4 2 4", "4 2 18446744073709551615", Section::Hull, Some(0))]
#[case("4 2 4", "4 2 99999999999999999999", Section::Levels, Some(0))]
#[case("[Variables]\n2", "[Variables]\n18446744073709551615", Section::Variables, None)]
#[case("[Number of table levels]\n1", "[Number of table levels]\n18446744073709551615", Section::LevelCount, None)]
fn malformed_2d(
    #[case] from: &str,
    #[case] to: &str,
    #[case] section: Section,
    #[case] level: Option<usize>,
) {
    assert!(TABLE_2D.contains(from), "bad test case {from:?}");
    let err = load(&TABLE_2D.replacen(from, to, 1)).unwrap_err();
    assert_eq!(section_of(&err), Some((section, level)), "got {err:?}");
}

#[rstest]
#[case("3 1 3 1.0\n3 1 3 0.5", "3 1 3 1.0\n3 1 3 1.0", Section::Levels, None)]
#[case("3 1 3 1.0\n3 1 3 0.5", "3 1 3 1.0\n3 1 3", Section::Levels, Some(1))]
#[case("3 1 3 1.0\n3 1 3 0.5", "3 1 3 1.0\n[Variables]", Section::Levels, Some(1))]
#[case("4 5 6", "4 5", Section::Data, Some(1))]
#[case("[Number of table levels]\n2", "[Number of table levels]\n18446744073709551615", Section::Levels, Some(2))]
#[case("3 1 3 0.5", "3 1 1000000000000 0.5", Section::Hull, Some(1))]
fn malformed_3d(
    #[case] from: &str,
    #[case] to: &str,
    #[case] section: Section,
    #[case] level: Option<usize>,
) {
    assert!(TABLE_3D.contains(from), "bad test case {from:?}");
    let err = load(&TABLE_3D.replacen(from, to, 1)).unwrap_err();
    assert_eq!(section_of(&err), Some((section, level)), "got {err:?}");
}

#[test]
fn three_levels_must_be_monotonic() {
    let text = TABLE_3D
        .replace("[Number of table levels]\n2", "[Number of table levels]\n3")
        .replace("3 1 3 0.5\n", "3 1 3 0.5\n3 1 3 0.75\n");
    let err = load(&text).unwrap_err();
    assert!(err.to_string().contains("strictly monotonic"));
}

#[test]
fn missing_final_level() {
    // second level blocks removed entirely
    let end = TABLE_3D.find("</Hull>\n").unwrap() + "</Hull>\n".len();
    let err = load(&TABLE_3D[..end]).unwrap_err();
    assert!(matches!(err, Error::MissingSection { ref marker, .. } if marker == "<Data>"));
}

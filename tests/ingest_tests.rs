use std::io::Write;

use cograph_core::{CographError, EdgeTable};

#[test]
fn reads_required_columns_and_ignores_extras() -> anyhow::Result<()> {
    let csv = "Journal,Source,Extra,Target,Weight\n\
               crisis-edges,Ann,x,Bob,2.5\n\
               marsden-edges,Bob,y,Cy,1\n";
    let table = EdgeTable::from_reader(csv.as_bytes())?;

    assert_eq!(table.len(), 2);
    let rows: Vec<_> = table.iter().collect();
    assert_eq!(rows[0].source, "Ann");
    assert_eq!(rows[0].target, "Bob");
    assert_eq!(rows[0].weight, 2.5);
    assert_eq!(rows[0].journal, "crisis-edges");
    assert_eq!(rows[1].journal, "marsden-edges");
    Ok(())
}

#[test]
fn strips_utf8_bom_from_first_header() -> anyhow::Result<()> {
    let csv = "\u{feff}Source,Target,Weight,Journal\nAnn,Bob,1,crisis-edges\n";
    let table = EdgeTable::from_reader(csv.as_bytes())?;
    assert_eq!(table.len(), 1);
    Ok(())
}

#[test]
fn missing_column_is_malformed() {
    let csv = "Source,Target,Journal\nAnn,Bob,crisis-edges\n";
    let err = EdgeTable::from_reader(csv.as_bytes()).unwrap_err();
    match err {
        CographError::MalformedInput(msg) => assert!(msg.contains("Weight"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_weight_fails_whole_table() {
    let csv = "Source,Target,Weight,Journal\n\
               Ann,Bob,1,crisis-edges\n\
               Bob,Cy,heavy,crisis-edges\n";
    let err = EdgeTable::from_reader(csv.as_bytes()).unwrap_err();
    match err {
        CographError::MalformedInput(msg) => {
            assert!(msg.contains("heavy"), "{msg}");
            assert!(msg.contains("line 3"), "{msg}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_and_nan_weights_are_rejected() {
    let negative = "Source,Target,Weight,Journal\nAnn,Bob,-1,crisis-edges\n";
    assert!(matches!(
        EdgeTable::from_reader(negative.as_bytes()),
        Err(CographError::MalformedInput(_))
    ));

    let nan = "Source,Target,Weight,Journal\nAnn,Bob,NaN,crisis-edges\n";
    assert!(matches!(
        EdgeTable::from_reader(nan.as_bytes()),
        Err(CographError::MalformedInput(_))
    ));
}

#[test]
fn short_rows_and_empty_endpoints_are_rejected() {
    let short = "Source,Target,Weight,Journal\nAnn,Bob,1\n";
    assert!(matches!(
        EdgeTable::from_reader(short.as_bytes()),
        Err(CographError::MalformedInput(_))
    ));

    let empty = "Source,Target,Weight,Journal\nAnn,,1,crisis-edges\n";
    assert!(matches!(
        EdgeTable::from_reader(empty.as_bytes()),
        Err(CographError::MalformedInput(_))
    ));
}

#[test]
fn empty_source_with_header_gives_empty_table() -> anyhow::Result<()> {
    let table = EdgeTable::from_reader("Source,Target,Weight,Journal\n".as_bytes())?;
    assert!(table.is_empty());
    Ok(())
}

#[test]
fn concatenates_several_files_in_order() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let first = dir.path().join("crisis.csv");
    let second = dir.path().join("marsden.csv");

    let mut f = std::fs::File::create(&first)?;
    writeln!(f, "Source,Target,Weight,Journal")?;
    writeln!(f, "Ann,Bob,1,crisis-edges")?;
    drop(f);

    let mut f = std::fs::File::create(&second)?;
    writeln!(f, "Source,Target,Weight,Journal")?;
    writeln!(f, "Bob,Cy,2,marsden-edges")?;
    writeln!(f, "Cy,Ann,3,marsden-edges")?;
    drop(f);

    let table = EdgeTable::from_paths(&[first, second])?;
    let sources: Vec<&str> = table.iter().map(|r| r.source.as_str()).collect();
    assert_eq!(sources, vec!["Ann", "Bob", "Cy"]);
    Ok(())
}

#[test]
fn missing_file_is_io_error() {
    let err = EdgeTable::from_path("does/not/exist.csv").unwrap_err();
    assert!(matches!(err, CographError::Io(_)));
}

#[test]
fn sample_fixture_loads() -> anyhow::Result<()> {
    let table = EdgeTable::from_path("data/sample_edges.csv")?;
    assert_eq!(table.len(), 14);
    Ok(())
}

//! Integration tests for ms-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{HeatRow, PathRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn path_row(mouse: u32, step: u64) -> PathRow {
        PathRow { mouse_id: mouse, step, x: step as u32, y: 1 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("paths.csv").exists());
        assert!(dir.path().join("heat.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("paths.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["mouse_id", "step", "x", "y"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("heat.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["mouse_id", "x", "y", "visits"]);
    }

    #[test]
    fn csv_path_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_paths(&[path_row(4, 0), path_row(4, 1), path_row(9, 0)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("paths.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "4");
        assert_eq!(&rows[1][1], "1");
        assert_eq!(&rows[1][2], "1");
        assert_eq!(&rows[2][0], "9");
    }

    #[test]
    fn csv_heat_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_heat(&[HeatRow { mouse_id: 7, x: 2, y: 3, visits: 4 }]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("heat.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "7");
        assert_eq!(&rows[0][3], "4");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod export_tests {
    use std::collections::HashMap;

    use ms_core::{Cell, MouseId};
    use ms_mouse::HeatMap;

    use crate::row::{HeatRow, PathRow};
    use crate::writer::OutputWriter;
    use crate::{OutputResult, write_results};

    /// Writer that keeps rows in memory.
    #[derive(Default)]
    struct MemWriter {
        paths:    Vec<PathRow>,
        heat:     Vec<HeatRow>,
        finishes: usize,
    }

    impl OutputWriter for MemWriter {
        fn write_paths(&mut self, rows: &[PathRow]) -> OutputResult<()> {
            self.paths.extend_from_slice(rows);
            Ok(())
        }
        fn write_heat(&mut self, rows: &[HeatRow]) -> OutputResult<()> {
            self.heat.extend_from_slice(rows);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    fn heat_with(cells: &[Cell]) -> HeatMap {
        let mut h = HeatMap::new(4, 4);
        for &c in cells {
            h.visit(c);
        }
        h
    }

    #[test]
    fn rows_sorted_by_identity_and_finished_once() {
        let paths = HashMap::from([
            (MouseId(2), vec![Cell::new(0, 0)]),
            (MouseId(1), vec![Cell::new(1, 1), Cell::new(2, 1)]),
        ]);
        let heat = HashMap::from([
            (MouseId(2), heat_with(&[Cell::new(0, 0)])),
            (MouseId(1), heat_with(&[Cell::new(1, 1), Cell::new(2, 1)])),
        ]);

        let mut w = MemWriter::default();
        write_results(&mut w, &paths, &heat).unwrap();

        let ids: Vec<_> = w.paths.iter().map(|r| (r.mouse_id, r.step)).collect();
        assert_eq!(ids, vec![(1, 0), (1, 1), (2, 0)]);
        assert_eq!(w.paths[1].x, 2);
        assert_eq!(w.heat.len(), 3);
        assert_eq!(w.heat[0].mouse_id, 1);
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn unvisited_heat_maps_write_nothing() {
        let paths: HashMap<u32, Vec<Cell>> = HashMap::new();
        let heat = HashMap::from([(5u32, HeatMap::new(3, 3))]);
        let mut w = MemWriter::default();
        write_results(&mut w, &paths, &heat).unwrap();
        assert!(w.heat.is_empty());
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn csv_ids_match_population_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let paths = HashMap::from([(MouseId(3), vec![Cell::new(1, 1)])]);
        let heat = HashMap::from([(MouseId(3), heat_with(&[Cell::new(1, 1)]))]);

        let mut w = crate::CsvWriter::new(dir.path()).unwrap();
        write_results(&mut w, &paths, &heat).unwrap();

        let text = std::fs::read_to_string(dir.path().join("paths.csv")).unwrap();
        assert_eq!(text, "mouse_id,step,x,y\n3,0,1,1\n");
        let text = std::fs::read_to_string(dir.path().join("heat.csv")).unwrap();
        assert_eq!(text, "mouse_id,x,y,visits\n3,1,1,1\n");
    }
}

//! Fixture workbooks for integration tests

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// One cell of a fixture row
#[derive(Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

pub use Cell::{Blank, Number, Text};

pub const HEADER: [&str; 6] = [
    "NOME",
    "ENDERECO",
    "CONTATO",
    "DEMANDA",
    "INFORMACOES",
    "ENCAMINHAMENTO",
];

/// Write `rows` (row 0 = header) to a single-sheet workbook
pub fn write_workbook(path: &Path, rows: &[Vec<Cell>]) {
    write_sheets(path, &[("Sheet1", rows)]);
}

/// Write several named sheets in order
pub fn write_sheets(path: &Path, sheets: &[(&str, &[Vec<Cell>])]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Text(s) => {
                        worksheet.write_string(r as u32, c as u16, *s).unwrap();
                    }
                    Number(n) => {
                        worksheet.write_number(r as u32, c as u16, *n).unwrap();
                    }
                    Blank => {}
                }
            }
        }
    }
    workbook.save(path).unwrap();
}

pub fn header() -> Vec<Cell<'static>> {
    HEADER.iter().map(|h| Text(*h)).collect()
}

/// Header, Ana, a whitespace-only row and Bia with a missing address
pub fn three_row_source(path: &Path) {
    write_workbook(
        path,
        &[
            header(),
            vec![
                Text("Ana"),
                Text("Rua A"),
                Number(111.0),
                Text("Saúde"),
                Text("obs1"),
                Text("Posto"),
            ],
            vec![Text("  "), Text(" "), Blank, Text("\t"), Blank, Text("   ")],
            vec![
                Text("Bia"),
                Blank,
                Text("222"),
                Blank,
                Blank,
                Text("Escola"),
            ],
        ],
    );
}

use pdfxref as pdf;
use pdf::reader::{DocumentTables, TableState};
use pdf::{DocumentSource, Position, TextDocument};

fn main() -> Result<(), pdf::Error> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let verbosity = match args.iter().filter(|arg| *arg == "-v").count() {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace
    };
    if let Err(err) = stderrlog::new().verbosity(verbosity).init() {
        eprintln!("Could not set up logging: {err}");
    }

    let Some(fname) = args.iter().find(|arg| !arg.starts_with('-')).cloned() else {
        let prog = std::env::args().next().unwrap_or("pdfxref".into());
        println!("Usage: {prog} [-v]... filename");
        println!("Then enter `<line> <column>` (0-based) to resolve, `table` or `reload`.");
        return Ok(())
    };

    let mut doc = TextDocument::new(fname.clone(), std::fs::read(&fname)?);
    let mut tables = DocumentTables::new();
    tables.on_active_document_changed(Some(&doc));

    for line in std::io::stdin().lines() {
        let line = line?;
        let parts = line.split_whitespace().collect::<Vec<_>>();
        match parts[..] {
            [] => {},
            ["table"] => match tables.state(doc.name()) {
                TableState::Parsed(xref) => {
                    println!("xref @ {}", xref.start);
                    for entry in xref.entries() {
                        println!("{entry}");
                    }
                },
                TableState::Unparsed => log::warn!("{} is not parsed.", doc.name())
            },
            ["reload"] => {
                doc.set_text(std::fs::read(&fname)?);
                tables.on_text_changed(&doc);
            },
            [p1, p2] => match (p1.parse::<usize>(), p2.parse::<usize>()) {
                (Ok(line), Ok(column)) => match tables.resolve(&doc, Position { line, column }) {
                    Some(loc) => println!("{loc}"),
                    None => println!("no definition")
                },
                _ => log::error!("Expected `<line> <column>`, got: {line}")
            },
            _ => log::error!("Unknown command: {line}")
        }
    }

    Ok(())
}

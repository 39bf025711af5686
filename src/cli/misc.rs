use marten_sat::{builder::ParserInfo, types::err::ErrorKind};

/// Writes a summary of a parse as comments, and returns whether the parse was successful.
pub fn examine_parser_report(parse_report: Result<ParserInfo, ErrorKind>) -> bool {
    match parse_report {
        Ok(info) => {
            match info.expected_atoms {
                Some(count) => println!("c Expected {count} atoms."),

                None => println!("c No preamble was found."),
            }

            println!("c Added    {} atoms.", info.added_atoms);

            if let Some(count) = info.expected_clauses {
                println!("c Expected {count} clauses.")
            }

            println!("c Added    {} clauses.", info.added_clauses);
            true
        }

        Err(e) => {
            println!("c Parse error: {e:?}");
            false
        }
    }
}

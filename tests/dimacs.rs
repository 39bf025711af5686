mod dimacs {
    use marten_sat::{
        config::Config,
        context::Context,
        reports::Report,
        types::err::{self},
    };

    fn read(dimacs: &[u8]) -> (Context, Result<marten_sat::builder::ParserInfo, err::ErrorKind>) {
        let mut ctx = Context::from_config(Config::default());
        let info = ctx.read_dimacs(dimacs);
        (ctx, info)
    }

    #[test]
    fn counts() {
        let (mut ctx, info) = read(b"c A formula\np cnf 3 2\n1 -2 0\n2 3 0\n");
        let info = info.unwrap();
        assert_eq!(info.expected_atoms, Some(3));
        assert_eq!(info.expected_clauses, Some(2));
        assert_eq!(info.added_atoms, 3);
        assert_eq!(info.added_clauses, 2);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn clauses_may_span_lines() {
        let (mut ctx, info) = read(b"p cnf 3 2\n1\n-2 0 2\n3 0\n-1 0\n-3 0\n");
        assert_eq!(info.map(|info| info.added_clauses), Ok(4));
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn without_a_problem_line() {
        let (mut ctx, info) = read(b"1 -5 0\n5 0\n");
        let info = info.unwrap();
        assert_eq!(info.expected_atoms, None);
        assert_eq!(info.added_atoms, 5);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.model_satisfies(&[vec![1, -5], vec![5]]));
    }

    #[test]
    fn percent_ends_the_formula() {
        let (_, info) = read(b"p cnf 2 1\n1 2 0\n%\n0\n");
        assert_eq!(info.map(|info| info.added_clauses), Ok(1));
    }

    #[test]
    fn empty_clause() {
        let (mut ctx, info) = read(b"p cnf 1 2\n1 0\n0\n");
        assert!(info.is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn tautologies_are_skipped() {
        let (mut ctx, info) = read(b"p cnf 2 2\n1 -1 0\n-2 0\n");
        assert_eq!(info.map(|info| info.added_clauses), Ok(2));
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model().map(|model| model[1]), Some(false));
    }

    #[test]
    fn literal_outside_problem() {
        let (_, info) = read(b"p cnf 2 1\n1 3 0\n");
        assert_eq!(
            info,
            Err(err::ErrorKind::MalformedClause(
                err::MalformedClauseError::UnknownAtom(3)
            ))
        );
    }

    #[test]
    fn literal_beyond_headerless_limit() {
        let (_, info) = read(b"1 -2 0\n2000000000 0\n");
        assert_eq!(
            info,
            Err(err::ErrorKind::MalformedClause(
                err::MalformedClauseError::UnknownAtom(2000000000)
            ))
        );

        let beyond = marten_sat::builder::HEADERLESS_ATOM_LIMIT as isize + 1;
        let (_, info) = read(format!("-{beyond} 0\n").as_bytes());
        assert_eq!(
            info,
            Err(err::ErrorKind::MalformedClause(
                err::MalformedClauseError::UnknownAtom(-beyond)
            ))
        );
    }

    #[test]
    fn unterminated_clause() {
        let (_, info) = read(b"p cnf 2 1\n1 2\n");
        assert_eq!(
            info,
            Err(err::ErrorKind::MalformedClause(
                err::MalformedClauseError::Unterminated
            ))
        );
    }

    #[test]
    fn bad_token() {
        let (_, info) = read(b"p cnf 2 1\n1 x 0\n");
        assert_eq!(info, Err(err::ErrorKind::Parse(err::ParseError::Line(2))));
    }

    #[test]
    fn bad_problem_line() {
        let (_, info) = read(b"p dnf 2 1\n1 2 0\n");
        assert_eq!(
            info,
            Err(err::ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn misplaced_problem_line() {
        let (_, info) = read(b"1 2 0\np cnf 2 1\n");
        assert_eq!(
            info,
            Err(err::ErrorKind::Parse(err::ParseError::MisplacedProblem(2)))
        );
    }
}

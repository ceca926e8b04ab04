use super::message::{format_move, ProtocolError, SessionSetup, Status};
use crate::core::serialization::decode_board;
use crate::logic::Othello;
use crate::player::ai::{eval, AIConfig, Algorithm, DepthLimit, MoveSelector};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub decisions: usize,
    /// `(dark, light)` from the FINAL line, if the manager sent one.
    pub final_score: Option<(u32, u32)>,
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ProtocolError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn write_line<W: Write>(output: &mut W, line: &str) -> Result<(), ProtocolError> {
    writeln!(output, "{}", line)?;
    output.flush()?;
    Ok(())
}

/// Runs one game against the manager. Returns when the manager sends
/// `FINAL` or closes the input.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &AIConfig,
) -> Result<SessionSummary, ProtocolError> {
    write_line(&mut output, &config.engine_name)?;

    let setup_line = read_line(&mut input)?.ok_or(ProtocolError::UnexpectedEof("setup line"))?;
    let mut setup: SessionSetup = setup_line.parse()?;
    setup.options.bounded_cache = config.search.bounded_cache;
    log_setup(&setup);

    let mut selector = MoveSelector::new(Box::new(Othello), eval::from_config(&config.evaluation));
    tracing::info!(evaluator = selector.evaluator_name(), "engine ready");

    let mut summary = SessionSummary::default();
    loop {
        let Some(line) = read_line(&mut input)? else {
            tracing::warn!("input closed before FINAL");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Status>()? {
            Status::Final { dark, light } => {
                tracing::info!(dark, light, "game over");
                summary.final_score = Some((dark, light));
                break;
            }
            Status::Score { dark, light } => {
                let board_line =
                    read_line(&mut input)?.ok_or(ProtocolError::UnexpectedEof("board"))?;
                let board = decode_board(&board_line)?;
                tracing::debug!(dark, light, "board:\n{}", board);

                let mv = selector.select_move(&board, setup.color, setup.depth, setup.options);
                if mv.is_none() {
                    tracing::info!("no legal move, passing");
                }
                write_line(&mut output, &format_move(mv))?;
                summary.decisions += 1;
            }
        }
    }

    Ok(summary)
}

fn log_setup(setup: &SessionSetup) {
    let on_off = |flag: bool| if flag { "ON" } else { "OFF" };

    match setup.options.algorithm {
        Algorithm::Minimax => tracing::info!(color = %setup.color, "Running MINIMAX"),
        Algorithm::AlphaBeta => tracing::info!(color = %setup.color, "Running ALPHA-BETA"),
    }
    tracing::info!("State Caching is {}", on_off(setup.options.caching));
    tracing::info!("Node Ordering is {}", on_off(setup.options.ordering));
    match setup.depth {
        DepthLimit::Unlimited => tracing::info!("Depth Limit is OFF"),
        DepthLimit::Limited(d) => tracing::info!("Depth Limit is {}", d),
    }
    if setup.options.algorithm == Algorithm::Minimax && setup.options.ordering {
        tracing::warn!("Node Ordering has no effect on Minimax");
    }
    if setup.options.algorithm == Algorithm::AlphaBeta
        && setup.options.caching
        && !setup.options.bounded_cache
    {
        tracing::warn!("alpha-beta cache reuses point values; results may differ from an uncached search");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::serialization::encode_board;
    use crate::core::{setup_from_strings, standard_setup};

    fn run(transcript: &str) -> (Result<SessionSummary, ProtocolError>, String) {
        let mut out = Vec::new();
        let result = run_session(transcript.as_bytes(), &mut out, &AIConfig::default());
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_session_plays_and_stops_on_final() {
        let board = encode_board(&standard_setup(8));
        let transcript = format!("1,2,0,1,1\nSCORE 2 2\n{}\nFINAL 40 24\nSCORE 1 1\n", board);
        let (result, out) = run(&transcript);

        let summary = result.unwrap();
        assert_eq!(summary.decisions, 1);
        assert_eq!(summary.final_score, Some((40, 24)));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Othello AI");
        assert_eq!(lines.len(), 2);
        let coords: Vec<usize> = lines[1]
            .split_whitespace()
            .map(|n| n.parse().unwrap())
            .collect();
        let legal = crate::logic::legal_moves(&standard_setup(8), crate::core::PlayerId::Dark);
        assert!(legal.contains(&crate::core::Move::new(coords[0], coords[1])));
    }

    #[test]
    fn test_session_writes_pass() {
        let board = encode_board(&setup_from_strings(&["X X", "X ."]));
        let transcript = format!("2,3,1,0,0\nSCORE 3 0\n{}\n", board);
        let (result, out) = run(&transcript);

        assert_eq!(result.unwrap().final_score, None);
        assert_eq!(out.lines().nth(1), Some("-1 -1"));
    }

    #[test]
    fn test_session_rejects_malformed_input() {
        let (result, _) = run("1,2,3\n");
        assert!(matches!(result, Err(ProtocolError::SetupFieldCount(3))));

        let (result, _) = run("1,2,0,0,0\nHELLO\n");
        assert!(matches!(result, Err(ProtocolError::MalformedStatus(_))));

        let (result, _) = run("1,2,0,0,0\nSCORE 2 2\n[[0, 9], [0, 0]]\n");
        assert!(matches!(result, Err(ProtocolError::MalformedBoard(_))));

        let (result, _) = run("1,2,0,0,0\nSCORE 2 2\n");
        assert!(matches!(result, Err(ProtocolError::UnexpectedEof("board"))));

        let (result, _) = run("");
        assert!(matches!(result, Err(ProtocolError::UnexpectedEof("setup line"))));
    }
}

use powerball_checker::application::readiness::{MissingInput, ReadinessState};
use powerball_checker::infrastructure::loader::read_ticket_rows;
use powerball_checker::{CheckerError, CheckerService, PrizeTier};
use std::io::Cursor;

const TICKETS_CSV: &str = "\
Ticket Number,WB 1,WB 2,WB 3,WB 4,WB 5,Powerball
T1,1,2,3,4,5,6
T2,1,2,3,4,9,6
T3,1,2,3,40,50,7
T4,10,20,30,40,50,6
T5,10,20,30,40,50,7
oops,1,2,3
T6,x,2,3,4,5,6
";

fn tiers(service: &mut CheckerService) -> Vec<(String, PrizeTier)> {
    service
        .check()
        .unwrap()
        .outcomes
        .iter()
        .map(|o| (o.ticket.ticket_number.clone(), o.tier))
        .collect()
}

#[test]
fn test_full_checking_run() {
    let rows = read_ticket_rows(Cursor::new(TICKETS_CSV), true).unwrap();
    let mut service = CheckerService::new();

    // 未加载任何输入时不能核对
    assert!(matches!(service.check(), Err(CheckerError::NotReady(_))));

    let summary = service.load_tickets(&rows);
    assert_eq!(summary.validated_count(), 5);
    assert_eq!(summary.rejected_count(), 2);
    assert_eq!(service.is_ready(), ReadinessState::TicketsOnly);

    match service.check() {
        Err(CheckerError::NotReady(e)) => {
            assert!(!e.missing.contains(&MissingInput::Tickets));
            assert!(e.missing.contains(&MissingInput::DrawWhiteBalls));
            assert!(e.missing.contains(&MissingInput::DrawPowerball));
        }
        other => panic!("expected NotReady, got {:?}", other),
    }

    service.load_draw(&["3", "1", "5", "2", "4", "6"]).unwrap();
    assert_eq!(service.is_ready(), ReadinessState::Ready);

    let report = service.check().unwrap();
    assert!(report.grand_prize_won);
    assert_eq!(report.tickets_checked, 5);

    assert_eq!(
        tiers(&mut service),
        vec![
            ("T1".to_string(), PrizeTier::GrandPrize),
            ("T2".to_string(), PrizeTier::FiftyThousand),
            ("T3".to_string(), PrizeTier::Seven),
            ("T4".to_string(), PrizeTier::Four),
        ]
    );
}

#[test]
fn test_redraw_changes_results() {
    let rows = read_ticket_rows(Cursor::new(TICKETS_CSV), true).unwrap();
    let mut service = CheckerService::new();
    service.load_tickets(&rows);
    service.load_draw(&["1", "2", "3", "4", "5", "6"]).unwrap();
    let first = tiers(&mut service);
    assert_eq!(first, tiers(&mut service));

    // 重新录入开奖号码后旧结果作废
    service.load_draw(&["10", "20", "30", "40", "50", "7"]).unwrap();
    assert!(service.last_report().is_none());

    let report = service.check().unwrap();
    assert!(report.grand_prize_won);
    assert_eq!(
        tiers(&mut service),
        vec![
            ("T3".to_string(), PrizeTier::Seven),
            ("T4".to_string(), PrizeTier::OneMillion),
            ("T5".to_string(), PrizeTier::GrandPrize),
        ]
    );
    assert_ne!(first, tiers(&mut service));
}

#[test]
fn test_rejected_draw_keeps_results_valid() {
    let rows = read_ticket_rows(Cursor::new(TICKETS_CSV), true).unwrap();
    let mut service = CheckerService::new();
    service.load_tickets(&rows);
    service.load_draw(&["1", "2", "3", "4", "5", "6"]).unwrap();
    service.check().unwrap();

    let err = service.load_draw(&["1", "2", "3", "4", "5"]).unwrap_err();
    assert!(matches!(err, CheckerError::InvalidDraw(_)));
    assert!(service.last_report().is_some());
    assert_eq!(service.draw().unwrap().white_balls(), &[1, 2, 3, 4, 5]);
}

use super::dashboard::Dashboard;
use super::formatter::{
    format_date, format_datetime, format_duration, format_hours, format_optional_clock, format_percent,
    format_signed_hours, format_weekday,
};
use super::location::CheckIn;
use super::messages::Message;
use super::overtime::OvertimeSummary;
use super::projects::ProjectDistribution;
use super::status::Section;
use super::week::WeekOverview;
use crate::{msg_error, msg_info, msg_print};
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    pub fn week(week: &WeekOverview) {
        msg_print!(
            Message::WeekHeader(format_weekday(&week.range.monday), format_weekday(&week.range.friday())),
            true
        );

        let mut table = Table::new();
        table.add_row(row!["TAG", "BEGINN", "ENDE", "STUNDEN", "SOLL"]);
        for day in &week.days {
            let mark = if day.complete { "✓" } else { "" };
            table.add_row(row![
                format_weekday(&day.date),
                format_optional_clock(day.first_start.as_ref()),
                format_optional_clock(day.last_end.as_ref()),
                format_hours(day.hours),
                mark
            ]);
        }
        table.add_row(Row::new(vec![
            Cell::new("Woche"),
            Cell::new(""),
            Cell::new(""),
            Cell::new(&format_hours(week.total_hours)),
            Cell::new(&format_signed_hours(week.delta_hours)).style_spec(week.tone().style_spec()),
        ]));
        table.printstd();

        msg_print!(Message::WeekTotal(format_hours(week.total_hours), format_hours(week.target_hours)));
        msg_print!(Message::WeekDelta(format_signed_hours(week.delta_hours)));
        if week.is_empty() {
            msg_info!(Message::NoEntriesThisWeek);
        }
    }

    pub fn overtime(summary: &OvertimeSummary) {
        msg_print!(Message::OvertimeHeader(summary.year), true);

        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Saldo"),
            Cell::new(&format_signed_hours(summary.balance)).style_spec(summary.tone().style_spec()),
        ]));
        table.add_row(row!["Aufgebaut (lfd. Jahr)", format_hours(summary.accrued_ytd)]);
        table.add_row(row!["Abgebaut (lfd. Jahr)", format_hours(summary.reduced_ytd)]);
        table.printstd();

        msg_print!(Message::OvertimeCorridor(
            format_signed_hours(summary.corridor.min),
            format_signed_hours(summary.corridor.max),
            format_percent(summary.corridor_position)
        ));

        if summary.recent.is_empty() {
            msg_info!(Message::NoOvertimeMovements);
            return;
        }
        msg_print!(Message::OvertimeRecentHeader);
        let mut recent = Table::new();
        recent.add_row(row!["DATUM", "STUNDEN", "GRUND"]);
        for entry in &summary.recent {
            recent.add_row(row![
                format_date(&entry.occurred_at.date()),
                format_signed_hours(entry.hours),
                entry.reason.clone().unwrap_or_default()
            ]);
        }
        recent.printstd();
    }

    pub fn projects(distribution: &ProjectDistribution) {
        msg_print!(Message::ProjectsHeader, true);
        if distribution.is_empty() {
            msg_info!(Message::NoProjectTime);
            return;
        }

        let mut table = Table::new();
        table.add_row(row!["PROJEKT", "STUNDEN", "ANTEIL"]);
        for share in &distribution.shares {
            table.add_row(row![share.name, format_hours(share.hours), format_percent(share.percentage)]);
        }
        table.printstd();
        msg_print!(Message::ProjectsTotal(format_hours(distribution.total_hours)));
    }

    pub fn check_ins(check_ins: &[CheckIn]) {
        msg_print!(Message::CheckInsHeader(check_ins.len()), true);
        if check_ins.is_empty() {
            msg_info!(Message::NoCheckIns);
            return;
        }

        let mut table = Table::new();
        table.add_row(row!["ID", "BEGINN", "ENDE", "PAUSE", "DAUER", "STUNDEN", "ORT"]);
        for check_in in check_ins {
            let entry = &check_in.entry;
            table.add_row(row![
                entry.id.map(|id| id.to_string()).unwrap_or_default(),
                format_datetime(&entry.start),
                format_optional_clock(entry.end.as_ref()),
                entry.break_minutes.map(|m| format!("{} min", m)).unwrap_or_else(|| "-".to_string()),
                entry.net_duration().map(|d| format_duration(&d)).unwrap_or_else(|| "-".to_string()),
                check_in.worked,
                check_in.location
            ]);
        }
        table.printstd();
    }

    fn section<T>(name: &str, section: &Section<T>, render: impl FnOnce(&T)) {
        match section {
            Section::Loading => msg_info!(Message::SectionLoading(name.to_string())),
            Section::Failed(reason) => msg_error!(Message::SectionFailed(name.to_string(), reason.clone())),
            Section::Ready(value) => render(value),
        }
    }

    pub fn dashboard(dashboard: &Dashboard, today: &chrono::NaiveDate) {
        msg_print!(Message::DashboardHeader(format_date(today)), true);
        Self::section("Woche", &dashboard.week, Self::week);
        Self::section("Überstunden", &dashboard.overtime, Self::overtime);
        Self::section("Projekte", &dashboard.projects, Self::projects);
        Self::section("Check-ins", &dashboard.check_ins, |check_ins| Self::check_ins(check_ins));
    }
}

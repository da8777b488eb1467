//! Display implementation for zeitkonto application messages.
//!
//! All user-facing text lives here, so command code only ever deals with
//! `Message` variants and their parameters. Dates and hours arrive already
//! formatted for the German display locale.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === WEEK MESSAGES ===
            Message::WeekHeader(first, last) => format!("Arbeitswoche {} bis {}", first, last),
            Message::WeekTotal(total, target) => format!("Wochensumme: {} von {}", total, target),
            Message::WeekDelta(delta) => format!("Differenz zum Soll: {}", delta),
            Message::NoEntriesThisWeek => "Keine Zeiteinträge in dieser Woche".to_string(),

            // === OVERTIME MESSAGES ===
            Message::OvertimeHeader(year) => format!("Überstundenkonto {}", year),
            Message::OvertimeCorridor(min, max, percent) => {
                format!("Position im Korridor {} bis {}: {}", min, max, percent)
            }
            Message::OvertimeRecentHeader => "Letzte Bewegungen:".to_string(),
            Message::NoOvertimeMovements => "Keine Überstundenbewegungen vorhanden".to_string(),
            Message::OvertimeBooked(hours) => format!("Überstunden gebucht: {}", hours),

            // === PROJECT MESSAGES ===
            Message::ProjectsHeader => "Projektzeitverteilung".to_string(),
            Message::ProjectsTotal(total) => format!("Gesamt: {}", total),
            Message::NoProjectTime => "Keine abgeschlossenen Projektzeiten gefunden".to_string(),

            // === CHECK-IN MESSAGES ===
            Message::CheckInsHeader(count) => format!("Check-in-Verlauf ({} Einträge)", count),
            Message::NoCheckIns => "Keine Check-ins vorhanden".to_string(),

            // === ENTRY MESSAGES ===
            Message::EntryStarted(id) => format!("Zeiteintrag {} gestartet", id),
            Message::EntryStopped(id, hours) => format!("Zeiteintrag {} beendet ({})", id, hours),
            Message::EntryAdded(id) => format!("Zeiteintrag {} angelegt", id),
            Message::EntryNotFound(id) => format!("Zeiteintrag {} nicht gefunden", id),
            Message::EntryAlreadyClosed(id) => format!("Zeiteintrag {} ist bereits beendet", id),
            Message::EntryNegativeDuration(id) => {
                format!("Zeiteintrag {}: Pause ist länger als die Anwesenheit, Nettozeit negativ", id)
            }

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader(date) => format!("Übersicht für {}", date),
            Message::SectionLoading(section) => format!("{}: wird geladen...", section),
            Message::SectionFailed(section, reason) => format!("{}: Fehler beim Laden ({})", section, reason),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export abgeschlossen: {}", path),
            Message::ExportingData(kind, format) => format!("Exportiere {} als {}...", kind, format),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Konfiguration gespeichert".to_string(),
            Message::ConfigModuleBackend => "Backend (gehosteter Tabellenspeicher)".to_string(),
            Message::ConfigModuleTracking => "Zeiterfassung".to_string(),
            Message::ConfigUsingLocalStore(path) => format!("Verwende lokalen Speicher: {}", path),
            Message::ConfigUsingBackend(url) => format!("Verwende Backend: {}", url),
            Message::PromptSelectModules => "Module zur Konfiguration auswählen".to_string(),
            Message::PromptBackendApiUrl => "Backend-URL".to_string(),
            Message::PromptBackendApiKey => "API-Schlüssel".to_string(),
            Message::PromptTargetHours => "Sollstunden pro Tag".to_string(),
            Message::PromptCorridorMin => "Untergrenze Überstundenkorridor (h)".to_string(),
            Message::PromptCorridorMax => "Obergrenze Überstundenkorridor (h)".to_string(),
            Message::PromptEmployeeId => "Mitarbeiter-ID (leer für alle)".to_string(),

            // === GENERIC MESSAGES ===
            Message::InvalidTimestamp(value) => format!("Ungültiger Zeitstempel: {}", value),
            Message::InvalidDate(value) => format!("Ungültiges Datum: {}", value),
        };
        write!(f, "{}", s)
    }
}

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    DefaultTerminal, Frame,
};

use crate::dashboard::Dashboard;
use crate::download::Downloader;
use crate::models::ReportId;
use crate::tui::{
    self, DISABLED_STYLE, FOOTER_STYLE, HEADER_STYLE, INPUT_STYLE, SELECTED_STYLE,
};

const PAGE_SIZE: usize = 20;
const EMPTY_MESSAGE: &str = "No reports found matching the criteria.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowseMode {
    Normal,
    EditFrom,
    EditTo,
}

pub enum BrowseAction {
    Continue,
    Close,
    Download,
    DownloadRow,
}

pub struct ReportBrowser {
    dashboard: Dashboard,
    downloader: Box<dyn Downloader>,
    offset: usize,
    visible_count: usize,
    selected: usize,
    mode: BrowseMode,
    /// Field value from before the edit started, restored on Esc.
    edit_original: String,
    status_message: Option<String>,
    table_state: TableState,
}

impl ReportBrowser {
    pub fn new(dashboard: Dashboard, downloader: Box<dyn Downloader>) -> Self {
        Self {
            dashboard,
            downloader,
            offset: 0,
            visible_count: PAGE_SIZE,
            selected: 0,
            mode: BrowseMode::Normal,
            edit_original: String::new(),
            status_message: None,
            table_state: TableState::default(),
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn run(&mut self) -> io::Result<()> {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            ratatui::restore();
            hook(info);
        }));

        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result
    }

    /// Draw the dashboard into the given frame.
    pub fn draw_frame(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let narrow = area.width < 120;

        let areas = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(1), // filter bar
            Constraint::Fill(1),   // table
            Constraint::Length(1), // status
            Constraint::Length(1), // keys
        ])
        .split(area);
        let title_area = areas[0];
        let filter_area = areas[1];
        let table_area = areas[2];
        let status_area = areas[3];
        let keys_area = areas[4];

        let summary = self.dashboard.summary();
        let filter_line = self.filter_line(summary.clear_enabled);

        frame.render_widget(Paragraph::new(summary.title()).style(HEADER_STYLE), title_area);
        frame.render_widget(Paragraph::new(filter_line), filter_area);

        let (fixed_cols, num_cols): (u16, u16) = if narrow {
            (3 + 4 + 22 + 10 + 9, 6)
        } else {
            (3 + 4 + 22 + 10 + 9 + 24, 7)
        };
        let spacing = num_cols - 1;
        let desc_width = table_area
            .width
            .saturating_sub(fixed_cols + spacing) as usize;
        let desc_width = desc_width.max(10);

        let header_overhead = 2u16; // header row + bottom_margin
        let available_height = table_area.height.saturating_sub(header_overhead) as usize;
        let mut rendered_rows = Vec::new();
        let mut total_height = 0usize;
        let mut vis = 0usize;

        let visible = self.dashboard.visible();
        for report in visible.iter().skip(self.offset) {
            let (wrapped_desc, line_count) = tui::wrap_text(report.description(), desc_width);
            let h = line_count as usize;

            if total_height + h > available_height && vis > 0 {
                break;
            }

            let mut cells = vec![
                Cell::from(tui::checkbox(report.is_selected(), false)),
                Cell::from(report.id().to_string()),
                Cell::from(report.name().to_string()),
                Cell::from(wrapped_desc),
                Cell::from(report.date().to_string()),
                Cell::from(tui::status_span(report.status())),
            ];
            if !narrow {
                cells.push(Cell::from(report.url().to_string()));
            }

            rendered_rows.push(Row::new(cells).height(line_count));
            total_height += h;
            vis += 1;
        }
        let visible_len = visible.len();

        if visible_len == 0 {
            rendered_rows.push(Row::new(vec![
                Cell::from(""),
                Cell::from(""),
                Cell::from(""),
                Cell::from(Span::styled(EMPTY_MESSAGE, FOOTER_STYLE)),
            ]));
        }

        self.visible_count = vis.max(1);

        let mut widths = vec![
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(22),
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(9),
        ];
        if !narrow {
            widths.push(Constraint::Length(24));
        }

        let select_all = tui::checkbox(summary.all_visible_selected, summary.some_visible_selected);
        let select_all_cell = if summary.select_all_enabled {
            Cell::from(select_all).style(HEADER_STYLE)
        } else {
            Cell::from(select_all).style(DISABLED_STYLE)
        };
        let mut header_cells = vec![
            select_all_cell,
            Cell::from("ID").style(HEADER_STYLE),
            Cell::from("Report Name").style(HEADER_STYLE),
            Cell::from("Description").style(HEADER_STYLE),
            Cell::from("Report Date").style(HEADER_STYLE),
            Cell::from("Status").style(HEADER_STYLE),
        ];
        if !narrow {
            header_cells.push(Cell::from("Download").style(HEADER_STYLE));
        }

        let highlighted = if visible_len == 0 { None } else { Some(self.selected) };
        self.table_state.select(highlighted);
        let table = Table::new(rendered_rows, widths)
            .header(Row::new(header_cells).bottom_margin(1))
            .column_spacing(1)
            .row_highlight_style(SELECTED_STYLE);

        frame.render_stateful_widget(table, table_area, &mut self.table_state);

        // Status line
        let end_row = (self.offset + self.visible_count).min(visible_len);
        let start_row = if visible_len == 0 { 0 } else { self.offset + 1 };
        let download = if summary.download_enabled {
            Span::styled(summary.download_label(), HEADER_STYLE)
        } else {
            Span::styled(summary.download_label(), DISABLED_STYLE)
        };
        let mut status = vec![
            Span::styled(
                format!(
                    "Rows {}-{} of {} | {} selected in view | ",
                    start_row, end_row, visible_len, summary.visible_selected
                ),
                FOOTER_STYLE,
            ),
            download,
        ];
        if let Some(ref msg) = self.status_message {
            status.push(Span::styled(format!(" | {msg}"), FOOTER_STYLE));
        }
        frame.render_widget(Paragraph::new(Line::from(status)), status_area);

        let keys = match self.mode {
            BrowseMode::Normal => {
                "\u{2191}/\u{2193}:move  space:select  a:all  f:from  t:to  s:search  c:clear  o:pdf  d:download  n/p:page  q:quit"
            }
            BrowseMode::EditFrom | BrowseMode::EditTo => {
                "Type YYYY-MM-DD, Enter=keep, Esc=cancel, then s to search"
            }
        };
        frame.render_widget(Paragraph::new(keys).style(FOOTER_STYLE), keys_area);
    }

    fn filter_line(&self, clear_enabled: bool) -> Line<'static> {
        let filter = self.dashboard.filter();
        let field = |label: &str, value: &str, focused: bool| {
            let cursor = if focused { "\u{2588}" } else { "" };
            let style = if focused { INPUT_STYLE } else { FOOTER_STYLE };
            Span::styled(format!("{label}: [{value:<10}{cursor}]  "), style)
        };
        let clear = if clear_enabled {
            Span::styled("Clear Filters", HEADER_STYLE)
        } else {
            Span::styled("Clear Filters", DISABLED_STYLE)
        };
        Line::from(vec![
            field("Select from date", filter.pending_from(), self.mode == BrowseMode::EditFrom),
            field("Select to date", filter.pending_to(), self.mode == BrowseMode::EditTo),
            Span::styled(
                format!("Showing: {}  ", filter.applied().describe()),
                FOOTER_STYLE,
            ),
            clear,
        ])
    }

    /// Handle a key event. Returns a BrowseAction indicating what the caller should do.
    pub fn handle_key_event(&mut self, code: KeyCode) -> BrowseAction {
        self.status_message = None;

        match self.mode {
            BrowseMode::Normal => match code {
                KeyCode::Char('q') | KeyCode::Esc => return BrowseAction::Close,
                KeyCode::Down => {
                    let len = self.dashboard.visible_ids().len();
                    if self.selected + 1 < self.visible_count.min(len.saturating_sub(self.offset)) {
                        self.selected += 1;
                    } else if self.offset + self.visible_count < len {
                        self.offset += 1;
                    }
                }
                KeyCode::Up => {
                    if self.selected > 0 {
                        self.selected -= 1;
                    } else if self.offset > 0 {
                        self.offset -= 1;
                    }
                }
                KeyCode::Char('n') | KeyCode::PageDown => {
                    self.scroll_down();
                    self.selected = 0;
                }
                KeyCode::Char('p') | KeyCode::PageUp => {
                    self.scroll_up();
                    self.selected = 0;
                }
                KeyCode::Home => self.reset_cursor(),
                KeyCode::Char(' ') => {
                    if let Some(id) = self.cursor_id() {
                        self.dashboard.toggle(id);
                    }
                }
                KeyCode::Char('a') => {
                    if self.dashboard.toggle_all_visible() == 0 {
                        self.status_message = Some("No reports in view".to_string());
                    }
                }
                KeyCode::Char('f') => self.begin_edit(BrowseMode::EditFrom),
                KeyCode::Char('t') => self.begin_edit(BrowseMode::EditTo),
                KeyCode::Char('s') | KeyCode::Enter => self.search(),
                KeyCode::Char('c') => {
                    if self.dashboard.filter().can_clear() {
                        self.dashboard.clear_filter();
                        self.reset_cursor();
                    }
                }
                KeyCode::Char('d') => return BrowseAction::Download,
                KeyCode::Char('o') => return BrowseAction::DownloadRow,
                _ => {}
            },
            BrowseMode::EditFrom | BrowseMode::EditTo => match code {
                KeyCode::Enter | KeyCode::Tab => self.mode = BrowseMode::Normal,
                KeyCode::Esc => {
                    let original = std::mem::take(&mut self.edit_original);
                    self.edit_field(|s| *s = original);
                    self.mode = BrowseMode::Normal;
                }
                KeyCode::Backspace => self.edit_field(|s| {
                    s.pop();
                }),
                KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                    self.edit_field(|s| s.push(c))
                }
                _ => {}
            },
        }
        BrowseAction::Continue
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw_frame(frame))?;

            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) = event::read()?
            {
                if kind != KeyEventKind::Press {
                    continue;
                }

                if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
                    break;
                }

                match self.handle_key_event(code) {
                    BrowseAction::Close => break,
                    BrowseAction::Continue => {}
                    BrowseAction::Download => self.download(),
                    BrowseAction::DownloadRow => self.download_row(),
                }
            }
        }
        Ok(())
    }

    /// Run the download through the configured service. Failures, including
    /// an empty selection, land in the status line.
    pub fn download(&mut self) {
        let message = match self.dashboard.download(self.downloader.as_ref()) {
            Ok(outcome) => outcome.message,
            Err(e) => e.to_string(),
        };
        self.status_message = Some(message);
    }

    /// Single-report download of the row under the cursor, independent of
    /// the checkbox selection.
    pub fn download_row(&mut self) {
        let message = match self.cursor_id() {
            Some(id) => match self.dashboard.download_one(id, self.downloader.as_ref()) {
                Ok(outcome) => outcome.message,
                Err(e) => e.to_string(),
            },
            None => "No report under the cursor".to_string(),
        };
        self.status_message = Some(message);
    }

    fn begin_edit(&mut self, mode: BrowseMode) {
        let filter = self.dashboard.filter();
        self.edit_original = match mode {
            BrowseMode::EditFrom => filter.pending_from().to_string(),
            BrowseMode::EditTo => filter.pending_to().to_string(),
            BrowseMode::Normal => return,
        };
        self.mode = mode;
    }

    fn edit_field(&mut self, edit: impl FnOnce(&mut String)) {
        let filter = self.dashboard.filter();
        let mut value = match self.mode {
            BrowseMode::EditFrom => filter.pending_from().to_string(),
            BrowseMode::EditTo => filter.pending_to().to_string(),
            BrowseMode::Normal => return,
        };
        edit(&mut value);
        match self.mode {
            BrowseMode::EditFrom => self.dashboard.set_pending_from(value),
            BrowseMode::EditTo => self.dashboard.set_pending_to(value),
            BrowseMode::Normal => {}
        }
    }

    fn search(&mut self) {
        match self.dashboard.apply_filter() {
            Ok(_) => self.reset_cursor(),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    fn cursor_id(&mut self) -> Option<ReportId> {
        let idx = self.offset + self.selected;
        self.dashboard.visible_ids().get(idx).copied()
    }

    fn reset_cursor(&mut self) {
        self.offset = 0;
        self.selected = 0;
    }

    fn scroll_down(&mut self) {
        let new_offset = self.offset + self.visible_count;
        if new_offset < self.dashboard.visible_ids().len() {
            self.offset = new_offset;
        }
    }

    fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.visible_count);
    }
}

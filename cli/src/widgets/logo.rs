use ratatui::text::{ Line, Text };

const LOGO: [&str; 5] = [
  "__   __ _    __  __    _    _   _    _",
  "\\ \\ / // \\  |  \\/  |  / \\  | | | |  / \\",
  " \\ V // _ \\ | |\\/| | / _ \\ | |_| | / _ \\",
  "  | |/ ___ \\| |  | |/ ___ \\|  _  |/ ___ \\",
  "  |_/_/   \\_\\_|  |_/_/   \\_\\_| |_/_/   \\_\\",
];

pub fn logo() -> Text<'static> {
  Text::from(LOGO.iter().map(|line| Line::raw(*line)).collect::<Vec<_>>())
}

use crate::ui::app::App;
use crate::ui::counter::Count;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::view::CounterView;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, count: Count) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.pending_async()), header);
    frame.render_widget(Clear, body);
    frame.render_widget(CounterView::new(app.props(count)), body);
    frame.render_widget(Footer::new().widget(footer), footer);
}

/// Every lesson runs the same ten-slide structure.
pub const SLIDE_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideView {
    Title,
    DoNow,
    Concept(u8),
    Check,
    Application(u8),
    Evidence,
    Evaluation,
    Assessment,
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseIcon {
    Activity,
    Brain,
    Clock,
}

impl PhaseIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            PhaseIcon::Activity => "∿",
            PhaseIcon::Brain => "◉",
            PhaseIcon::Clock => "◷",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase {
    pub phase: &'static str,
    pub title: &'static str,
    pub icon: PhaseIcon,
    pub time: &'static str,
}

pub fn slide_view(index: usize) -> SlideView {
    match index {
        0 => SlideView::Title,
        1 => SlideView::DoNow,
        2 => SlideView::Concept(1),
        3 => SlideView::Concept(2),
        4 => SlideView::Check,
        5 => SlideView::Application(1),
        6 => SlideView::Application(2),
        7 => SlideView::Evidence,
        8 => SlideView::Evaluation,
        9 => SlideView::Assessment,
        _ => SlideView::NotFound,
    }
}

impl SlideView {
    /// Header shown above the slide body. Title and placeholder slides have none.
    pub fn phase(self) -> Option<Phase> {
        let (phase, title, icon, time) = match self {
            SlideView::DoNow => {
                ("Phase 1: Activation", "Do Now Quiz", PhaseIcon::Activity, "5 MINS")
            }
            SlideView::Concept(1) => {
                ("Phase 2: Concept", "Concept 1", PhaseIcon::Brain, "10 MINS")
            }
            SlideView::Concept(_) => {
                ("Phase 2: Concept", "Concept 2", PhaseIcon::Brain, "10 MINS")
            }
            SlideView::Check => {
                ("Phase 2: Check", "Understanding Check", PhaseIcon::Brain, "10 MINS")
            }
            SlideView::Application(1) => {
                ("Phase 3: Application", "Simulation (Part 1)", PhaseIcon::Activity, "8 MINS")
            }
            SlideView::Application(_) => {
                ("Phase 3: Application", "Simulation (Part 2)", PhaseIcon::Activity, "8 MINS")
            }
            SlideView::Evidence => {
                ("Phase 4: Evidence", "Research Studies", PhaseIcon::Brain, "10 MINS")
            }
            SlideView::Evaluation => {
                ("Phase 5: Evaluation", "Critical Analysis", PhaseIcon::Brain, "10 MINS")
            }
            SlideView::Assessment => {
                ("Phase 6: Assessment", "Essay Plan & Exam Prep", PhaseIcon::Clock, "5 MINS")
            }
            SlideView::Title | SlideView::NotFound => return None,
        };
        Some(Phase {
            phase,
            title,
            icon,
            time,
        })
    }
}

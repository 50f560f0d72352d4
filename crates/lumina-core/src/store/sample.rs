//! First-run sample dataset.

use crate::models::NotePatch;

use super::Store;

impl Store {
    /// Seed the store with a small welcome dataset: two spaces and three
    /// notes demonstrating spaces, tags, and starring. Intended for empty
    /// stores; callers decide whether seeding is appropriate.
    pub fn seed_sample_data(&mut self) {
        let work = self.create_space("Work", "purple", "briefcase");
        let personal = self.create_space("Personal", "green", "home");

        let design = self.create_note(Some(work));
        let _ = self.update_note(
            design,
            NotePatch::new()
                .title("Assistant product principles")
                .content(
                    "# Assistant product principles\n\n\
                     ## Keep the user in charge\n\
                     - Understand real needs instead of assuming them\n\
                     - Reduce cognitive load, favor direct manipulation\n\
                     - Offer control and transparency over suggestions\n\n\
                     ## Progressive enhancement\n\
                     - Core features must work with the assistant disabled\n\
                     - Suggestions augment the experience, never replace it\n",
                )
                .tags(vec!["product".into(), "assistant".into(), "ux".into()])
                .starred(true),
        );

        let kickoff = self.create_note(Some(work));
        let _ = self.update_note(
            kickoff,
            NotePatch::new()
                .title("Project kickoff notes")
                .content(
                    "# Project kickoff notes\n\n\
                     ## Decisions\n\
                     - MVP in six weeks\n\
                     - Design drafts due Friday\n\
                     - First internal test in two weeks\n",
                )
                .tags(vec!["meeting".into(), "project".into()]),
        );

        let thinking = self.create_note(Some(personal));
        let _ = self.update_note(
            thinking,
            NotePatch::new()
                .title("Innovation frameworks")
                .content(
                    "# Innovation frameworks\n\n\
                     ## First principles\n\
                     - Return to basic facts and rebuild from there\n\n\
                     ## Lateral thinking\n\
                     - Look for non-obvious connections between ideas\n",
                )
                .tags(vec!["innovation".into(), "thinking".into()])
                .starred(true),
        );

        self.set_active_note(None);
    }
}

use crate::error::{PRODUCT_FETCH_FAILED, StoreError};
use crate::model::product::Product;
use crate::preview::PreviewSource;

use super::{FormMode, ProductDraft};

/// Lifecycle of a product form.
///
/// `Loading` only happens when editing, while the product is fetched. A
/// failed submission returns to `Ready` with the error recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Loading,
    Ready,
    Submitting,
}

/// Answer to a submit click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Send the request now.
    Proceed,
    /// The product is still loading or a submission is outstanding.
    Busy,
    /// The draft is incomplete; the error is shown and nothing is sent.
    Invalid(StoreError),
}

/// Where to go once the backend accepted the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSubmit {
    Home,
    ProductDetail(i64),
}

pub struct FormController<F, S: PreviewSource<F>> {
    mode: FormMode,
    phase: FormPhase,
    error: Option<String>,
    draft: ProductDraft<F, S>,
}

impl<F, S: PreviewSource<F>> FormController<F, S> {
    pub fn new(mode: FormMode, previews: S) -> Self {
        let phase = match mode {
            FormMode::Create => FormPhase::Ready,
            FormMode::Edit { .. } => FormPhase::Loading,
        };
        Self {
            mode,
            phase,
            error: None,
            draft: ProductDraft::new(previews),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn draft(&self) -> &ProductDraft<F, S> {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProductDraft<F, S> {
        &mut self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Whether a response tagged with `mode` still belongs to this form.
    /// Responses of requests made before the form switched to another
    /// product are dropped with it.
    pub fn is_current(&self, mode: FormMode) -> bool {
        self.mode == mode
    }

    fn awaits_product(&self, requested: i64) -> bool {
        self.phase == FormPhase::Loading && self.mode == FormMode::Edit { id: requested }
    }

    /// Fills the form with the product fetched for `requested`. Returns
    /// `false`, changing nothing, when that product is not the one edited.
    pub fn loaded(&mut self, requested: i64, product: &Product) -> bool {
        if !self.awaits_product(requested) {
            return false;
        }
        self.draft.populate(product);
        self.phase = FormPhase::Ready;
        self.error = None;
        true
    }

    /// The product could not be fetched. The (empty) form stays usable.
    pub fn load_failed(&mut self, requested: i64) -> bool {
        if !self.awaits_product(requested) {
            return false;
        }
        self.phase = FormPhase::Ready;
        self.error = Some(PRODUCT_FETCH_FAILED.to_string());
        true
    }

    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.phase != FormPhase::Ready {
            return SubmitStart::Busy;
        }
        self.error = None;
        if let Err(err) = self.draft.validate(self.mode) {
            self.error = Some(err.to_string());
            return SubmitStart::Invalid(err);
        }
        self.phase = FormPhase::Submitting;
        SubmitStart::Proceed
    }

    fn settles(&self, mode: FormMode) -> bool {
        self.is_current(mode) && self.phase == FormPhase::Submitting
    }

    /// Back to `Ready` with the message shown; typed values are untouched.
    /// Ignored unless a submission made in `mode` is outstanding.
    pub fn submit_failed(&mut self, mode: FormMode, message: impl Into<String>) -> bool {
        if !self.settles(mode) {
            return false;
        }
        self.phase = FormPhase::Ready;
        self.error = Some(message.into());
        true
    }

    /// Releases every preview and tells the caller where to navigate, or
    /// `None` when no submission made in `mode` is outstanding.
    pub fn submit_succeeded(&mut self, mode: FormMode) -> Option<AfterSubmit> {
        if !self.settles(mode) {
            return None;
        }
        self.phase = FormPhase::Ready;
        self.error = None;
        self.draft.release_previews();
        Some(match self.mode {
            FormMode::Create => AfterSubmit::Home,
            FormMode::Edit { id } => AfterSubmit::ProductDetail(id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{CREATE_INCOMPLETE, Field};
    use crate::preview::tests::FakeUrls;

    type Controller = FormController<&'static str, FakeUrls>;

    fn fill(controller: &mut Controller) {
        let draft = controller.draft_mut();
        draft.set(Field::Name, "Áo thun");
        draft.set(Field::Price, "120000");
        draft.set(Field::Quantity, "3");
        draft.set(Field::Description, "Cotton");
        draft.set(Field::Category, "Thời trang");
    }

    #[test]
    fn create_starts_ready_and_edit_starts_loading() {
        let create = Controller::new(FormMode::Create, FakeUrls::default());
        assert_eq!(create.phase(), FormPhase::Ready);
        let edit = Controller::new(FormMode::Edit { id: 1 }, FakeUrls::default());
        assert_eq!(edit.phase(), FormPhase::Loading);
    }

    #[test]
    fn invalid_submit_is_repeatable_and_keeps_values() {
        let mut form = Controller::new(FormMode::Create, FakeUrls::default());
        fill(&mut form);
        let expected = SubmitStart::Invalid(StoreError::Validation(CREATE_INCOMPLETE.to_string()));
        assert_eq!(form.begin_submit(), expected);
        assert_eq!(form.begin_submit(), expected);
        assert_eq!(form.phase(), FormPhase::Ready);
        assert_eq!(form.error(), Some(CREATE_INCOMPLETE));
        assert_eq!(form.draft().get(Field::Name), "Áo thun");
        assert_eq!(form.draft().get(Field::Price), "120000");
    }

    #[test]
    fn second_submit_while_in_flight_is_a_no_op() {
        let mut form = Controller::new(FormMode::Create, FakeUrls::default());
        fill(&mut form);
        form.draft_mut().attach(vec!["a.png"]);
        assert_eq!(form.begin_submit(), SubmitStart::Proceed);
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), SubmitStart::Busy);
    }

    #[test]
    fn failed_submit_returns_to_ready_with_message() {
        let mut form = Controller::new(FormMode::Create, FakeUrls::default());
        fill(&mut form);
        form.draft_mut().attach(vec!["a.png"]);
        for _ in 0..2 {
            assert_eq!(form.begin_submit(), SubmitStart::Proceed);
            assert!(form.submit_failed(FormMode::Create, "Tên sản phẩm đã tồn tại"));
            assert_eq!(form.phase(), FormPhase::Ready);
            assert_eq!(form.error(), Some("Tên sản phẩm đã tồn tại"));
            assert_eq!(form.draft().attachments().len(), 1);
            assert_eq!(form.draft().get(Field::Category), "Thời trang");
        }
    }

    #[test]
    fn success_releases_previews_and_picks_destination() {
        let urls = FakeUrls::default();
        let mut form = Controller::new(FormMode::Create, urls.clone());
        fill(&mut form);
        form.draft_mut().attach(vec!["a.png", "b.png"]);
        assert_eq!(form.begin_submit(), SubmitStart::Proceed);
        assert_eq!(form.submit_succeeded(FormMode::Create), Some(AfterSubmit::Home));
        assert!(urls.live.borrow().is_empty());

        let mut edit = Controller::new(FormMode::Edit { id: 4 }, FakeUrls::default());
        let product = Product {
            id: 4,
            name: "Quần jean".into(),
            price: 1.0,
            quantity: 2,
            description: "Xanh".into(),
            category: "Thời trang".into(),
            image_urls: vec!["x.png".into()],
        };
        assert!(edit.loaded(4, &product));
        assert_eq!(edit.begin_submit(), SubmitStart::Proceed);
        assert_eq!(
            edit.submit_succeeded(FormMode::Edit { id: 4 }),
            Some(AfterSubmit::ProductDetail(4))
        );
    }

    #[test]
    fn failed_load_leaves_form_usable() {
        let mut form = Controller::new(FormMode::Edit { id: 4 }, FakeUrls::default());
        assert!(form.load_failed(4));
        assert_eq!(form.phase(), FormPhase::Ready);
        assert_eq!(form.error(), Some(PRODUCT_FETCH_FAILED));
    }

    fn stored(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.into(),
            price: 10.0,
            quantity: 1,
            description: "Mô tả".into(),
            category: "Thời trang".into(),
            image_urls: vec![format!("{id}.png")],
        }
    }

    #[test]
    fn late_product_of_previous_route_is_ignored() {
        let mut form = Controller::new(FormMode::Edit { id: 5 }, FakeUrls::default());
        assert!(form.loaded(5, &stored(5, "Quần jean")));
        assert!(!form.loaded(4, &stored(4, "Áo thun")));
        assert!(!form.load_failed(4));
        assert_eq!(form.draft().get(Field::Name), "Quần jean");
        assert_eq!(form.draft().existing_images(), ["5.png"]);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn stale_product_cannot_fill_a_form_still_loading() {
        let mut form = Controller::new(FormMode::Edit { id: 5 }, FakeUrls::default());
        assert!(!form.loaded(4, &stored(4, "Áo thun")));
        assert_eq!(form.phase(), FormPhase::Loading);
        assert!(form.draft().get(Field::Name).is_empty());
    }

    #[test]
    fn submit_result_of_another_mode_is_ignored() {
        let mut form = Controller::new(FormMode::Edit { id: 5 }, FakeUrls::default());
        form.loaded(5, &stored(5, "Quần jean"));
        assert_eq!(form.begin_submit(), SubmitStart::Proceed);
        assert_eq!(form.submit_succeeded(FormMode::Edit { id: 4 }), None);
        assert!(!form.submit_failed(FormMode::Create, "lỗi"));
        assert!(form.is_submitting());
        assert!(form.submit_failed(FormMode::Edit { id: 5 }, "lỗi"));
        assert_eq!(form.submit_succeeded(FormMode::Edit { id: 5 }), None);
    }

    #[test]
    fn teardown_releases_previews() {
        let urls = FakeUrls::default();
        {
            let mut form = Controller::new(FormMode::Create, urls.clone());
            form.draft_mut().attach(vec!["a.png"]);
        }
        assert!(urls.live.borrow().is_empty());
    }
}

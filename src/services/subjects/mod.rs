pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use super::ServiceContext;
use crate::errors::Result;
use crate::models::common::PageState;
use crate::models::subjects::entities::Subject;

pub struct SubjectService {
    ctx: ServiceContext,
    pub keyword: String,
    pub page: PageState,
    pub items: Vec<Subject>,
    pub loading: bool,
}

impl SubjectService {
    pub fn new(ctx: ServiceContext) -> Self {
        let page = PageState::new(ctx.ui.page_size);
        Self {
            ctx,
            keyword: String::new(),
            page,
            items: Vec::new(),
            loading: false,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        list::load_subjects(self).await
    }

    pub async fn set_page(&mut self, page: i64, items_per_page: i64) -> Result<()> {
        self.page.set_page(page, items_per_page);
        self.load().await
    }

    pub async fn set_keyword(&mut self, keyword: &str) -> Result<()> {
        self.keyword = keyword.to_string();
        self.page.reset();
        self.load().await
    }

    pub async fn create_subject(&mut self, name: &str) -> Result<()> {
        create::create_subject(self, name).await
    }

    pub async fn rename_subject(&mut self, id: i64, name: &str) -> Result<()> {
        update::rename_subject(self, id, name).await
    }

    /// 仍有在读学员的科目不允许删除
    pub async fn delete_subject(&mut self, subject: &Subject) -> Result<bool> {
        delete::delete_subject(self, subject).await
    }
}

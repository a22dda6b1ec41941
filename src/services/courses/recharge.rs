use tracing::info;

use super::CourseService;
use crate::dispatch::routes;
use crate::errors::{Result, TuitionError};
use crate::models::courses::requests::RechargeCourseRequest;
use crate::models::orders::entities::OrderTag;
use crate::utils::classification::categorize_order_tags;
use crate::utils::status::{LABEL_PAUSED, LABEL_STUDENT_WITHDRAWN, effective_course_status};
use crate::utils::validate::{validate_recharge, validate_remark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RechargeMode {
    Charge, // 充值
    Refund, // 扣除/退费
}

impl RechargeMode {
    pub fn quick_values(&self) -> &'static [i64] {
        match self {
            RechargeMode::Charge => &[10, 20, 30, 50, 100],
            RechargeMode::Refund => &[1, 2, 4, 8],
        }
    }

    pub fn default_hours(&self) -> i64 {
        match self {
            RechargeMode::Charge => 10,
            RechargeMode::Refund => 1,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            RechargeMode::Charge => "充值",
            RechargeMode::Refund => "扣除",
        }
    }
}

/// 充值/扣除弹窗的表单，课时数始终为正，提交时按模式取符号
#[derive(Debug, Clone, PartialEq)]
pub struct RechargeForm {
    pub course_id: i64,
    pub mode: RechargeMode,
    pub hours: i64,
    pub amount: Option<f64>,
    pub remark: String,
}

impl RechargeForm {
    pub fn new(course_id: i64, mode: RechargeMode) -> Self {
        Self {
            course_id,
            mode,
            hours: mode.default_hours(),
            amount: None,
            remark: String::new(),
        }
    }

    pub fn signed_hours(&self) -> i64 {
        match self.mode {
            RechargeMode::Charge => self.hours,
            RechargeMode::Refund => -self.hours,
        }
    }

    pub fn apply_quick_value(&mut self, hours: i64) {
        self.hours = hours;
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<()> {
        validate_recharge(self.hours, self.amount.unwrap_or(0.0))?;
        validate_remark(&self.remark)
    }

    /// 按备注实时推断的分类标签
    pub fn inferred_tags(&self) -> Vec<OrderTag> {
        categorize_order_tags(&self.remark)
    }

    pub fn to_request(&self) -> RechargeCourseRequest {
        RechargeCourseRequest {
            course_id: self.course_id,
            hours: self.signed_hours(),
            amount: self.amount.unwrap_or(0.0),
            remark: self.remark.trim().to_string(),
        }
    }
}

pub fn begin_recharge(
    service: &CourseService,
    course_id: i64,
    mode: RechargeMode,
) -> Result<RechargeForm> {
    let course = service.course(course_id).inspect_err(|e| service.ctx.reject(e))?;
    let status = effective_course_status(course);

    let refused = match mode {
        RechargeMode::Charge => status.label == LABEL_STUDENT_WITHDRAWN,
        // 暂停的课程允许扣除
        RechargeMode::Refund => status.disabled && status.label != LABEL_PAUSED,
    };
    if refused {
        let err = match mode {
            RechargeMode::Charge => TuitionError::status_gate("操作失败：学员已退学"),
            RechargeMode::Refund => TuitionError::status_gate(format!("操作失败：{}", status.desc)),
        };
        service.ctx.reject(&err);
        return Err(err);
    }

    Ok(RechargeForm::new(course_id, mode))
}

pub async fn submit_recharge(service: &mut CourseService, form: &RechargeForm) -> Result<()> {
    form.validate().inspect_err(|e| service.ctx.reject(e))?;

    let req = form.to_request();
    service
        .ctx
        .client
        .call_unit(routes::course::RECHARGE, &req)
        .await
        .inspect_err(|e| service.ctx.report("", e))?;

    // 本地修正余额，不重新加载列表
    if let Some(course) = service.items.iter_mut().find(|c| c.id == req.course_id) {
        course.balance += req.hours;
        info!("Course {} balance is now {}", course.id, course.balance);
    }
    service
        .ctx
        .notifier
        .success(&format!("{}成功：{} 节", form.mode.action(), form.hours));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::courses::fixtures::{course_json, list_json};
    use crate::services::testing::harness;
    use serde_json::{Value, json};

    async fn loaded_service(
        h: &crate::services::testing::Harness,
        courses: Vec<Value>,
    ) -> CourseService {
        let body = list_json(courses);
        h.backend
            .register_typed(routes::course::GET_LIST, move |_: Value| {
                let body = body.clone();
                async move { Ok::<_, String>(body) }
            });
        let mut service = CourseService::new(h.ctx.clone());
        service.load().await.unwrap();
        service
    }

    #[test]
    fn test_form_defaults_and_sign() {
        let mut form = RechargeForm::new(1, RechargeMode::Refund);
        assert_eq!(form.hours, 1);
        form.apply_quick_value(4);
        assert_eq!(form.signed_hours(), -4);
        assert_eq!(RechargeMode::Charge.quick_values(), &[10, 20, 30, 50, 100]);
        assert_eq!(RechargeForm::new(1, RechargeMode::Charge).hours, 10);
    }

    #[test]
    fn test_form_validation() {
        let mut form = RechargeForm::new(1, RechargeMode::Charge);
        assert!(form.is_valid());
        form.hours = 0;
        assert!(!form.is_valid());
        form.hours = 5;
        form.amount = Some(-10.0);
        assert!(!form.is_valid());
    }

    #[tokio::test]
    async fn test_recharge_refused_for_withdrawn_student() {
        let h = harness(true);
        let service = loaded_service(&h, vec![course_json(1, 3, 1, 5)]).await;
        let err = service.begin_recharge(1, RechargeMode::Charge).unwrap_err();
        assert_eq!(err, TuitionError::status_gate("操作失败：学员已退学"));
        assert_eq!(h.notifier.last().unwrap().message, "操作失败：学员已退学");
    }

    #[tokio::test]
    async fn test_deduction_gate() {
        let h = harness(true);
        let service = loaded_service(
            &h,
            vec![
                course_json(1, 2, 1, 5), // 学员停课
                course_json(2, 1, 2, 5), // 课程暂停
                course_json(3, 1, 3, 5), // 已结课
            ],
        )
        .await;
        let err = service.begin_recharge(1, RechargeMode::Refund).unwrap_err();
        assert_eq!(
            err.message(),
            "操作失败：因学员档案处于停课状态，该课程被冻结"
        );
        assert!(service.begin_recharge(2, RechargeMode::Refund).is_ok());
        assert!(service.begin_recharge(3, RechargeMode::Refund).is_err());
        // 停课学员仍可充值
        assert!(service.begin_recharge(1, RechargeMode::Charge).is_ok());
    }

    #[tokio::test]
    async fn test_submit_patches_local_balance() {
        let h = harness(true);
        h.backend
            .register_typed(routes::course::RECHARGE, |req: Value| async move {
                assert_eq!(req["hours"], json!(-2));
                Ok::<_, String>(json!(null))
            });
        let mut service = loaded_service(&h, vec![course_json(1, 1, 1, 5)]).await;
        let mut form = service.begin_recharge(1, RechargeMode::Refund).unwrap();
        form.apply_quick_value(2);
        form.remark = "请假补扣".into();
        service.submit_recharge(&form).await.unwrap();

        assert_eq!(service.items[0].balance, 3);
        assert_eq!(h.notifier.last().unwrap().message, "扣除成功：2 节");
        // 只有加载和充值两次调用
        assert_eq!(h.backend.calls().len(), 2);
    }
}

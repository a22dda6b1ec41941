//! 根据流水备注推断分类标签
//!
//! 仅做子串匹配，纠错与历史结余两类互斥且独占，其余类别可以叠加。

use crate::models::orders::entities::OrderTag;

const CORRECTION_KEYWORDS: &[&str] = &[
    "退费", "退款", "打错", "记错", "多记", "少记", "修正", "调整", "误操作", "补录", "撤销", "退回",
];
const SETTLEMENT_KEYWORDS: &[&str] = &[
    "结余", "遗留", "旧系统", "初始", "剩余", "结算", "交接", "盘点", "底",
];
const TRANSFER_KEYWORDS: &[&str] = &["转给", "转入", "转出", "互转", "转课", "划拨"];
const GIFT_KEYWORDS: &[&str] = &["送", "赠", "免", "奖", "集赞", "优惠", "福利", "奖励"];
const REFERRAL_KEYWORDS: &[&str] = &["介绍", "推荐", "拉新", "老带新", "拼团", "合报", "一起报"];
const EXPANSION_KEYWORDS: &[&str] = &["扩科", "新报", "加报", "多科"];
// 顺序决定显示哪个支付方式
const PAYMENT_KEYWORDS: &[&str] = &["微信", "支付宝", "现金", "银行", "扫码", "转账", "支付"];
const RECHARGE_KEYWORDS: &[&str] = &["充值", "续费", "缴费", "补交", "买", "报名", "报课"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

pub fn categorize_order_tags(remark: &str) -> Vec<OrderTag> {
    let text = remark.trim();
    if text.is_empty() {
        return Vec::new();
    }

    if contains_any(text, CORRECTION_KEYWORDS) {
        return vec![OrderTag::new("系统调整/纠错", "error")];
    }
    if contains_any(text, SETTLEMENT_KEYWORDS) {
        return vec![OrderTag::new("历史结余", "blue-grey")];
    }

    let mut tags = Vec::new();

    let has_referral = contains_any(text, REFERRAL_KEYWORDS);
    let has_expansion = contains_any(text, EXPANSION_KEYWORDS);
    let has_gift = contains_any(text, GIFT_KEYWORDS);

    if contains_any(text, TRANSFER_KEYWORDS) {
        tags.push(OrderTag::new("课时互转", "indigo"));
    }
    if has_referral {
        tags.push(OrderTag::new("转介绍/拼团", "purple"));
    }
    if has_expansion {
        tags.push(OrderTag::new("扩科报名", "deep-purple"));
    }

    let payment = PAYMENT_KEYWORDS.iter().find(|kw| text.contains(*kw));
    if let Some(kw) = payment {
        tags.push(OrderTag::new(format!("{kw}支付"), "cyan-darken-1"));
    }

    let is_recharge = payment.is_some() || contains_any(text, RECHARGE_KEYWORDS);
    if is_recharge && has_gift {
        tags.push(OrderTag::new("充值赠送", "teal"));
    } else if has_gift {
        tags.push(OrderTag::new("活动赠送", "orange"));
    } else if is_recharge && !has_expansion && !has_referral {
        tags.push(OrderTag::new("常规充值", "success"));
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(remark: &str) -> Vec<String> {
        categorize_order_tags(remark)
            .into_iter()
            .map(|t| t.label)
            .collect()
    }

    #[test]
    fn test_empty_remark_has_no_tags() {
        assert!(categorize_order_tags("").is_empty());
        assert!(categorize_order_tags("   ").is_empty());
    }

    #[test]
    fn test_correction_is_exclusive() {
        let tags = categorize_order_tags("微信充值打错了，退款");
        assert_eq!(tags, vec![OrderTag::new("系统调整/纠错", "error")]);
    }

    #[test]
    fn test_settlement_without_correction() {
        let tags = categorize_order_tags("旧系统结余课时，赠送");
        assert_eq!(tags, vec![OrderTag::new("历史结余", "blue-grey")]);
    }

    #[test]
    fn test_correction_beats_settlement() {
        assert_eq!(labels("结余修正"), vec!["系统调整/纠错"]);
    }

    #[test]
    fn test_payment_with_gift() {
        assert_eq!(labels("支付宝续费送2节"), vec!["支付宝支付", "充值赠送"]);
    }

    #[test]
    fn test_first_payment_keyword_wins() {
        // “支付宝”排在“支付”之前
        assert_eq!(labels("支付宝"), vec!["支付宝支付", "常规充值"]);
        assert_eq!(labels("现金 微信"), vec!["微信支付", "常规充值"]);
    }

    #[test]
    fn test_plain_gift() {
        assert_eq!(labels("集赞活动"), vec!["活动赠送"]);
    }

    #[test]
    fn test_referral_suppresses_regular_recharge() {
        assert_eq!(labels("老带新充值"), vec!["转介绍/拼团"]);
        assert_eq!(labels("扩科充值"), vec!["扩科报名"]);
    }

    #[test]
    fn test_transfer_tag() {
        assert_eq!(labels("转给妹妹"), vec!["课时互转"]);
    }

    #[test]
    fn test_unrelated_remark() {
        assert!(categorize_order_tags("周末上课").is_empty());
    }
}

//! 后端注册的路由名
//!
//! 分隔符沿用后端的注册方式：教师与看板模块使用 `:`，其余模块使用 `/`。

pub mod student {
    pub const GET_LIST: &str = "student_manager/get_student_list";
    pub const CREATE: &str = "student_manager/create_student";
    pub const UPDATE: &str = "student_manager/update_student";
    pub const DELETE: &str = "student_manager/delete_student";
    pub const EXPORT: &str = "student_manager/export_students";
}

pub mod teacher {
    pub const CREATE: &str = "teacher_manager:create_teacher";
    pub const GET_LIST: &str = "teacher_manager:get_teacher_list";
    pub const DELETE: &str = "teacher_manager:delete_teacher";
    pub const UPDATE: &str = "teacher_manager:update_teacher";
    pub const EXPORT: &str = "teacher_manager:export_teacher_to_excel";
}

pub mod subject {
    pub const GET_LIST: &str = "subject_manager/get_subject_list";
    pub const CREATE: &str = "subject_manager/create_subject";
    pub const UPDATE: &str = "subject_manager/update_subject";
    pub const DELETE: &str = "subject_manager/delete_subject";
}

pub mod course {
    pub const CREATE: &str = "course_manager/create_course";
    pub const GET_LIST: &str = "course_manager/get_course_list";
    pub const TOGGLE_STATUS: &str = "course_manager/toggle_status";
    pub const DELETE: &str = "course_manager/delete";
    pub const UPDATE: &str = "course_manager/update";
    pub const RECHARGE: &str = "course_manager/recharge";
}

pub mod record {
    pub const CREATE: &str = "record_manager/create_record";
    pub const GET_LIST: &str = "record_manager/get_record_list";
    pub const ACTIVATE: &str = "record_manager/activate_record";
    pub const DELETE: &str = "record_manager/delete_record_by_id";
    pub const ACTIVATE_ALL_PENDING: &str = "record_manager/activate_all_pending_records";
    pub const EXPORT: &str = "record_manager/export_record_to_excel";
    pub const DOWNLOAD_TEMPLATE: &str = "record_manager/download_import_template";
    pub const IMPORT: &str = "record_manager/import_from_excel";
    pub const SELECT_IMPORT_FILE: &str = "record_manager/select_import_file";
}

pub mod order {
    pub const GET_LIST: &str = "order_manager/get_order_list";
    pub const EXPORT: &str = "order_manager/export_orders_to_excel";
}

pub mod dashboard {
    pub const SUMMARY: &str = "dashboard_manager:get_summary";
    pub const FINANCE_CHART: &str = "dashboard_manager:get_finance_chart";
    pub const TEACHER_RANK: &str = "dashboard_manager:get_teacher_rank";
    pub const HEATMAP: &str = "dashboard_manager:get_heatmap";
    pub const STUDENT_GROWTH: &str = "dashboard_manager:get_student_growth";
    pub const STUDENT_ENGAGEMENT: &str = "dashboard_manager:get_student_engagement";
    pub const STUDENT_BALANCE: &str = "dashboard_manager:get_student_balance";
}

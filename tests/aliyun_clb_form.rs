use certdeploy::config::ClbDefaults;
use certdeploy::deploy::{
    AliyunClbConfig, DeployEditContext, DeployRecord, EditContext, ProviderConfig, ResourceType,
};
use certdeploy::i18n::{Catalog, Locale, Localizer};
use certdeploy::ui::AliyunClbForm;

fn setup() -> (AliyunClbForm, EditContext<AliyunClbConfig>, Catalog) {
    let mut ctx = EditContext::new_record("aliyun-clb");
    let mut form = AliyunClbForm::new();
    form.mount(&mut ctx, &ClbDefaults::default());
    (form, ctx, Catalog::builtin(Locale::En).unwrap())
}

fn stored(ctx: &EditContext<AliyunClbConfig>) -> AliyunClbConfig {
    ctx.config().config.clone().unwrap()
}

#[test]
fn test_new_record_gets_defaults_on_mount() {
    let (_form, ctx, _t) = setup();

    assert_eq!(
        stored(&ctx),
        AliyunClbConfig {
            region: Some("cn-hangzhou".to_string()),
            resource_type: None,
            loadbalancer_id: None,
            listener_port: Some("443".to_string()),
        }
    );
    assert!(ctx.errors().is_empty());
}

#[test]
fn test_certificate_ignores_loadbalancer_fields() {
    let (mut form, mut ctx, t) = setup();
    AliyunClbForm::on_resource_type_change(&mut ctx, ResourceType::Certificate);
    AliyunClbForm::on_listener_port_change(&mut ctx, "");
    form.sync(&mut ctx, &t);

    assert_eq!(ctx.errors().get("loadbalancerId"), None);
    assert_eq!(ctx.errors().get("listenerPort"), None);
    assert!(!ctx.errors().has_errors());
}

#[test]
fn test_loadbalancer_requires_id() {
    let (mut form, mut ctx, t) = setup();
    AliyunClbForm::on_resource_type_change(&mut ctx, ResourceType::Loadbalancer);
    form.sync(&mut ctx, &t);

    assert_eq!(
        ctx.errors().get("loadbalancerId"),
        Some(t.t("domain.deployment.form.aliyun_clb_loadbalancer_id.placeholder").as_str())
    );

    AliyunClbForm::on_loadbalancer_id_change(&mut ctx, "lb-bp1abc");
    form.sync(&mut ctx, &t);
    assert_eq!(ctx.errors().get("loadbalancerId"), None);
}

#[test]
fn test_listener_port_range() {
    let (mut form, mut ctx, t) = setup();
    AliyunClbForm::on_resource_type_change(&mut ctx, ResourceType::Listener);
    AliyunClbForm::on_loadbalancer_id_change(&mut ctx, "lb-bp1abc");

    for bad in ["0", "65535", "abc"] {
        AliyunClbForm::on_listener_port_change(&mut ctx, bad);
        form.sync(&mut ctx, &t);
        assert!(ctx.errors().get("listenerPort").is_some(), "port {:?} accepted", bad);
    }

    AliyunClbForm::on_listener_port_change(&mut ctx, "443");
    form.sync(&mut ctx, &t);
    assert_eq!(ctx.errors().get("listenerPort"), None);
    assert!(!ctx.errors().has_errors());
}

#[test]
fn test_edits_are_trimmed() {
    let (_form, mut ctx, _t) = setup();
    AliyunClbForm::on_region_change(&mut ctx, " cn-beijing ");
    AliyunClbForm::on_loadbalancer_id_change(&mut ctx, "\tlb-1 ");

    let config = stored(&ctx);
    assert_eq!(config.region.as_deref(), Some("cn-beijing"));
    assert_eq!(config.loadbalancer_id.as_deref(), Some("lb-1"));
}

#[test]
fn test_leaving_listener_keeps_port() {
    let (mut form, mut ctx, t) = setup();
    AliyunClbForm::on_resource_type_change(&mut ctx, ResourceType::Listener);
    AliyunClbForm::on_listener_port_change(&mut ctx, "0");
    assert!(stored(&ctx).listener_port_visible());

    AliyunClbForm::on_resource_type_change(&mut ctx, ResourceType::Loadbalancer);
    form.sync(&mut ctx, &t);

    let config = stored(&ctx);
    assert!(!config.listener_port_visible());
    assert_eq!(config.listener_port.as_deref(), Some("0"));
    assert_eq!(ctx.errors().get("listenerPort"), None);
}

#[test]
fn test_errors_are_recomputed_not_merged() {
    let (mut form, mut ctx, t) = setup();
    AliyunClbForm::on_region_change(&mut ctx, "");
    form.sync(&mut ctx, &t);
    assert!(ctx.errors().get("region").is_some());

    AliyunClbForm::on_region_change(&mut ctx, "cn-qingdao");
    form.sync(&mut ctx, &t);
    assert_eq!(ctx.errors().get("region"), None);
    assert_eq!(ctx.errors().len(), AliyunClbConfig::fields().len());
}

#[test]
fn test_edit_does_not_touch_other_fields() {
    let record = DeployRecord::new("aliyun-clb").with_id("d-3").with_config(AliyunClbConfig {
        region: Some("cn-hongkong".to_string()),
        resource_type: Some(ResourceType::Listener),
        loadbalancer_id: Some("lb-9".to_string()),
        listener_port: Some("8443".to_string()),
    });
    let mut ctx = EditContext::from_record(record.clone());
    let mut form = AliyunClbForm::new();
    form.mount(&mut ctx, &ClbDefaults::default());

    AliyunClbForm::on_listener_port_change(&mut ctx, "9443");

    let updated = ctx.config();
    assert_eq!(updated.id, record.id);
    let config = updated.config.clone().unwrap();
    assert_eq!(config.region.as_deref(), Some("cn-hongkong"));
    assert_eq!(config.loadbalancer_id.as_deref(), Some("lb-9"));
    assert_eq!(config.listener_port.as_deref(), Some("9443"));
}

#[test]
fn test_localized_messages() {
    let mut ctx = EditContext::new_record("aliyun-clb");
    let mut form = AliyunClbForm::new();
    form.mount(&mut ctx, &ClbDefaults::default());
    let zh = Catalog::builtin(Locale::Zh).unwrap();

    form.sync(&mut ctx, &zh);
    assert_eq!(ctx.errors().get("resourceType"), Some("请选择替换方式"));
}

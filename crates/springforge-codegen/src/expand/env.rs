//! The fixed set of environment-configuration artifacts. Their content is
//! independent of the schema; only their placement under the output directory
//! matters.

use crate::artifact::{Artifact, ArtifactKind};
use std::path::PathBuf;

const APPLICATION_DEV_PROPERTIES: &str = "\
# Database configuration (H2 for development)
spring.datasource.url=jdbc:h2:mem:testdb
spring.datasource.driver-class-name=org.h2.Driver
spring.datasource.username=sa
spring.datasource.password=password
spring.jpa.database-platform=org.hibernate.dialect.H2Dialect

# Hibernate configuration
spring.jpa.hibernate.ddl-auto=update
spring.jpa.show-sql=true

# Enable H2 console
spring.h2.console.enabled=true
spring.h2.console.path=/h2-console

# Server configuration
server.port=8080

# Logging
logging.level.org.springframework=DEBUG
logging.level.com.example=DEBUG
";

const APPLICATION_PROD_PROPERTIES: &str = "\
# Database configuration (MySQL for production)
spring.datasource.url=jdbc:mysql://prod-db:3306/mydatabase
spring.datasource.username=produser
spring.datasource.password=prodpassword
spring.datasource.driver-class-name=com.mysql.cj.jdbc.Driver

# Hibernate configuration
spring.jpa.hibernate.ddl-auto=validate
spring.jpa.show-sql=false
spring.jpa.properties.hibernate.dialect=org.hibernate.dialect.MySQL8Dialect

# Server configuration
server.port=8080

# Logging
logging.level.org.springframework=INFO
logging.level.com.example=INFO

# Disable H2 console
spring.h2.console.enabled=false
";

const LOGBACK_SPRING_XML: &str = r#"<configuration>
    <!-- Console appender -->
    <appender name="STDOUT" class="ch.qos.logback.core.ConsoleAppender">
        <encoder>
            <pattern>%d{yyyy-MM-dd HH:mm:ss} %-5level %logger{36} - %msg%n</pattern>
        </encoder>
    </appender>

    <!-- Application logger -->
    <logger name="com.example" level="DEBUG" />

    <!-- Spring logger -->
    <logger name="org.springframework" level="INFO" />

    <!-- Root logger -->
    <root level="INFO">
        <appender-ref ref="STDOUT" />
    </root>
</configuration>
"#;

const SWAGGER_CONFIG_JAVA: &str = r#"package com.example.config;

import org.springframework.context.annotation.Bean;
import org.springframework.context.annotation.Configuration;
import springfox.documentation.builders.PathSelectors;
import springfox.documentation.builders.RequestHandlerSelectors;
import springfox.documentation.spi.DocumentationType;
import springfox.documentation.spring.web.plugins.Docket;
import springfox.documentation.swagger2.annotations.EnableSwagger2;

@Configuration
@EnableSwagger2
public class SwaggerConfig {

    @Bean
    public Docket api() {
        return new Docket(DocumentationType.SWAGGER_2)
            .select()
            .apis(RequestHandlerSelectors.basePackage("com.example.controller"))
            .paths(PathSelectors.any())
            .build();
    }
}
"#;

const SECURITY_CONFIG_JAVA: &str = r#"package com.example.config;

import org.springframework.context.annotation.Bean;
import org.springframework.context.annotation.Configuration;
import org.springframework.security.config.annotation.web.builders.HttpSecurity;
import org.springframework.security.config.annotation.web.configuration.EnableWebSecurity;
import org.springframework.security.web.SecurityFilterChain;

@Configuration
@EnableWebSecurity
public class SecurityConfig {

    @Bean
    public SecurityFilterChain securityFilterChain(HttpSecurity http) throws Exception {
        http
            .csrf().disable() // Disable CSRF for REST APIs
            .authorizeHttpRequests()
                .requestMatchers("/api/public/**").permitAll() // Allow public access to certain routes
                .anyRequest().authenticated() // All other routes require authentication
            .and()
            .httpBasic(); // Use basic authentication (username/password)
        return http.build();
    }
}
"#;

const APPLICATION_YML: &str = r#"spring:
  datasource:
    url: jdbc:mysql://localhost:3306/mydatabase
    username: root
    password: password
    driver-class-name: com.mysql.cj.jdbc.Driver
  jpa:
    hibernate:
      ddl-auto: update
    show-sql: true
    properties:
      hibernate:
        dialect: org.hibernate.dialect.MySQL8Dialect
server:
  port: 8080
logging:
  level:
    org.springframework: INFO
    com.example: DEBUG
"#;

const APPLICATION_PROPERTIES: &str = "\
# Database configuration
spring.datasource.url=jdbc:mysql://localhost:3306/mydatabase
spring.datasource.username=root
spring.datasource.password=password
spring.datasource.driver-class-name=com.mysql.cj.jdbc.Driver

# Hibernate configuration
spring.jpa.hibernate.ddl-auto=update
spring.jpa.show-sql=true
spring.jpa.properties.hibernate.dialect=org.hibernate.dialect.MySQL8Dialect

# Server configuration
server.port=8080

# Logging
logging.level.org.springframework=INFO
logging.level.com.example=DEBUG
";

const RESOURCES_DIR: &str = "src/main/resources";
const CONFIG_CLASS_DIR: &str = "src/main/java/com/example/config";

pub(crate) fn artifacts() -> Vec<Artifact> {
    let resource = |file_name: &str, contents: &str| Artifact {
        kind: ArtifactKind::Environment,
        path: [RESOURCES_DIR, file_name].iter().collect::<PathBuf>(),
        contents: contents.to_string(),
    };
    let config_class = |file_name: &str, contents: &str| Artifact {
        kind: ArtifactKind::Environment,
        path: [CONFIG_CLASS_DIR, file_name].iter().collect::<PathBuf>(),
        contents: contents.to_string(),
    };

    vec![
        resource("application-dev.properties", APPLICATION_DEV_PROPERTIES),
        resource("application-prod.properties", APPLICATION_PROD_PROPERTIES),
        resource("logback-spring.xml", LOGBACK_SPRING_XML),
        resource("application.yml", APPLICATION_YML),
        resource("application.properties", APPLICATION_PROPERTIES),
        config_class("SwaggerConfig.java", SWAGGER_CONFIG_JAVA),
        config_class("SecurityConfig.java", SECURITY_CONFIG_JAVA),
    ]
}
